//! One tab: a page engine plus the state the shell shows for it.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use cinder_engine::{PageEngine, HOMEPAGE_HTML, HOME_URL};

/// Stable tab identity, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(Uuid);

impl TabId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Label shown until a navigation confirms.
pub const DEFAULT_TAB_TITLE: &str = "New Tab";

/// Longest label the tab strip renders before truncation.
const LABEL_LIMIT: usize = 30;

pub struct Tab {
    id: TabId,
    current_url: String,
    title: String,
    created_at: DateTime<Utc>,
    engine: Box<dyn PageEngine>,
}

impl Tab {
    /// Wrap `engine` in a new tab and load `target` into it.
    pub fn create(target: &str, engine: Box<dyn PageEngine>) -> Self {
        let mut tab = Self {
            id: TabId::new(),
            current_url: String::new(),
            title: DEFAULT_TAB_TITLE.to_string(),
            created_at: Utc::now(),
            engine,
        };
        tab.navigate(target);
        tracing::debug!(tab_id = %tab.id, url = target, "created tab");
        tab
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Last confirmed url, or the home sentinel. Empty until the first
    /// navigation completes.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Point the tab at `target`.
    ///
    /// The home sentinel renders the embedded homepage and is confirmed on
    /// the spot; static content has no asynchronous completion. Anything
    /// else is handed to the engine and `current_url` keeps its old value
    /// until [`Tab::page_url_changed`] confirms the load. The cached url is
    /// never written speculatively from user input.
    pub fn navigate(&mut self, target: &str) {
        if target == HOME_URL {
            self.engine.load_html(HOMEPAGE_HTML);
            self.current_url = HOME_URL.to_string();
            self.title = DEFAULT_TAB_TITLE.to_string();
        } else {
            self.engine.navigate(target);
        }
    }

    /// Confirmation callback for a completed load in this tab's engine.
    ///
    /// When navigations overlap, the most recent notification wins. The
    /// title is the url text; no page-title extraction happens here.
    pub fn page_url_changed(&mut self, url: &str) {
        self.current_url = url.to_string();
        self.title = url.to_string();
        tracing::debug!(tab_id = %self.id, url, "url confirmed");
    }

    pub fn back(&mut self) {
        self.engine.back();
    }

    pub fn forward(&mut self) {
        self.engine.forward();
    }

    pub fn reload(&mut self) {
        self.engine.reload();
    }

    /// Forward `source` verbatim to the engine.
    pub fn run_script(&mut self, source: &str) {
        self.engine.run_script(source);
    }

    /// Label text for the tab strip, truncated the way the strip sizes
    /// tabs.
    pub fn display_title(&self) -> String {
        let count = self.title.chars().count();
        if count <= LABEL_LIMIT {
            self.title.clone()
        } else {
            let head: String = self.title.chars().take(LABEL_LIMIT - 3).collect();
            format!("{head}...")
        }
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("current_url", &self.current_url)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
