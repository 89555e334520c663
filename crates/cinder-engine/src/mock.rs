//! Recording engine double.
//!
//! Renders nothing and remembers every call. Backs the test suites and any
//! headless embedding that wants to observe what the shell would have asked
//! a real engine to do.

use std::cell::RefCell;
use std::rc::Rc;

use crate::PageEngine;

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Navigate(String),
    Back,
    Forward,
    Reload,
    LoadHtml(String),
    RunScript(String),
}

/// Shared handle onto a [`RecordingEngine`]'s call log.
///
/// Clones observe the same log, so a caller can keep one while the engine
/// itself is boxed away inside a tab.
#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<EngineCommand>>>);

impl CommandLog {
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<EngineCommand> {
        self.0.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, command: EngineCommand) {
        self.0.borrow_mut().push(command);
    }
}

/// [`PageEngine`] implementation that only records.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    log: CommandLog,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto the call log, valid after the engine moves into a tab.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl PageEngine for RecordingEngine {
    fn navigate(&mut self, url: &str) {
        self.log.push(EngineCommand::Navigate(url.to_string()));
    }

    fn back(&mut self) {
        self.log.push(EngineCommand::Back);
    }

    fn forward(&mut self) {
        self.log.push(EngineCommand::Forward);
    }

    fn reload(&mut self) {
        self.log.push(EngineCommand::Reload);
    }

    fn load_html(&mut self, html: &str) {
        self.log.push(EngineCommand::LoadHtml(html.to_string()));
    }

    fn run_script(&mut self, source: &str) {
        self.log.push(EngineCommand::RunScript(source.to_string()));
    }
}
