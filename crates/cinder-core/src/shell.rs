//! The browser shell: session, toolbar bindings, console and display
//! state.
//!
//! Toolbar commands are bound once, for the lifetime of the shell, to
//! methods that look up the session's active tab at call time. Switching
//! tabs therefore rebinds nothing; there are no per-tab subscriptions to
//! leak or go stale. Display state (address bar text, window
//! title, tab labels) is derived from the session on read, so it can never
//! disagree with the tab it describes.

use cinder_engine::{PageEngine, HOME_URL};
use cinder_navigation::{AddressResolver, HistoryLog, Resolution};
use cinder_storage::Store;
use cinder_tabs::{Session, Tab, TabId};

use crate::bookmarks::{Bookmark, Bookmarks};
use crate::config::{Config, APP_NAME};
use crate::snapshot::SavedSession;
use crate::user_css::{injection_script, DEFAULT_USER_CSS};
use crate::Result;

const BOOKMARKS_DOC: &str = "bookmarks";
const SESSION_DOC: &str = "session";
const USER_CSS_DOC: &str = "userstyle";

/// Called once per tab; each tab exclusively owns the engine it gets.
pub type EngineFactory = Box<dyn FnMut() -> Box<dyn PageEngine>>;

pub struct Shell {
    session: Session,
    engines: EngineFactory,
    resolver: AddressResolver,
    history: HistoryLog,
    bookmarks: Bookmarks,
    store: Store,
    config: Config,
    console_visible: bool,
    user_css: String,
}

impl Shell {
    /// Build a shell with a fresh session: one tab on the homepage,
    /// active. Persisted bookmarks and stylesheet are loaded if present.
    pub fn new(config: Config, mut engines: EngineFactory) -> Result<Self> {
        let store = Store::open(&config.data_dir)?;
        let bookmarks = store.load(BOOKMARKS_DOC)?.unwrap_or_default();
        let user_css: String = store
            .load(USER_CSS_DOC)?
            .unwrap_or_else(|| DEFAULT_USER_CSS.to_string());

        let mut first = Tab::create(HOME_URL, engines());
        first.run_script(&injection_script(&user_css));

        let resolver = AddressResolver::with_search_engine(config.search_engine.clone());

        tracing::info!(data_dir = %config.data_dir.display(), "shell ready");

        Ok(Self {
            session: Session::new(first),
            engines,
            resolver,
            history: HistoryLog::new(),
            bookmarks,
            store,
            config,
            console_visible: false,
            user_css,
        })
    }

    // === Toolbar commands ===
    //
    // Each command resolves the active tab at the moment it fires. An
    // empty session degrades every command to a logged no-op.

    pub fn back(&mut self) {
        self.with_active("back", Tab::back);
    }

    pub fn forward(&mut self) {
        self.with_active("forward", Tab::forward);
    }

    pub fn reload(&mut self) {
        self.with_active("reload", Tab::reload);
    }

    /// Show the built-in homepage in the active tab. The homepage is
    /// static, so the address bar reflects it immediately.
    pub fn home(&mut self) {
        self.with_active("home", |tab| tab.navigate(HOME_URL));
    }

    /// Open a new homepage tab and focus it.
    pub fn new_tab(&mut self) -> TabId {
        let mut tab = Tab::create(HOME_URL, (self.engines)());
        tab.run_script(&injection_script(&self.user_css));
        self.session.push(tab)
    }

    /// Resolve address-bar text and point the active tab at the result.
    ///
    /// For engine-loaded targets the address bar keeps showing the last
    /// confirmed url until the engine reports the new one; only the
    /// synchronous homepage shows up at once.
    pub fn address_entered(&mut self, text: &str) {
        let target = match self.resolver.resolve(text) {
            Resolution::NoOp => return,
            Resolution::Home => HOME_URL.to_string(),
            Resolution::Verbatim(url) | Resolution::Normalized(url) | Resolution::Search(url) => {
                url
            }
        };
        tracing::debug!(url = %target, "address submitted");
        self.with_active("navigate", |tab| tab.navigate(&target));
    }

    /// Focus the tab `id`. A stale id is a logged no-op.
    pub fn switch_to(&mut self, id: TabId) {
        if let Err(err) = self.session.set_active(id) {
            tracing::warn!(tab_id = %id, %err, "switch ignored");
        }
    }

    /// Close the tab `id`; focus moves to its neighbor. Closing the last
    /// tab leaves the session empty; whether that also closes the window
    /// is the embedder's decision (see [`Shell::is_empty`]).
    pub fn close_tab(&mut self, id: TabId) {
        if let Err(err) = self.session.close(id) {
            tracing::warn!(tab_id = %id, %err, "close ignored");
        }
    }

    // === Engine notifications ===

    /// Url-changed notification from the engine behind `id`.
    ///
    /// Tab state and history are always updated, focused or not; the
    /// address bar follows automatically because it is derived from the
    /// active tab. The user stylesheet is re-installed into the freshly
    /// loaded page.
    pub fn page_url_changed(&mut self, id: TabId, url: &str) {
        let script = injection_script(&self.user_css);
        match self.session.get_mut(id) {
            Ok(tab) => {
                tab.page_url_changed(url);
                tab.run_script(&script);
                self.history.record_visit(url, "");
            }
            Err(_) => {
                tracing::debug!(tab_id = %id, url, "url change for a closed tab dropped");
            }
        }
    }

    // === Dev console ===

    pub fn toggle_console(&mut self) {
        self.console_visible = !self.console_visible;
    }

    pub fn console_visible(&self) -> bool {
        self.console_visible
    }

    /// Run console text in the active page. The text is forwarded
    /// verbatim and never interpreted here.
    pub fn run_script(&mut self, source: &str) {
        self.with_active("run script", |tab| tab.run_script(source));
    }

    /// Replace the user stylesheet: persist it and install it into every
    /// open tab.
    pub fn apply_user_css(&mut self, css: &str) -> Result<()> {
        self.user_css = css.to_string();
        self.store.save(USER_CSS_DOC, &self.user_css)?;

        let script = injection_script(&self.user_css);
        for tab in self.session.iter_mut() {
            tab.run_script(&script);
        }
        Ok(())
    }

    pub fn user_css(&self) -> &str {
        &self.user_css
    }

    // === Bookmarks ===

    /// Bookmark the active tab's page. Nothing happens without an active
    /// tab or before its first confirmed navigation.
    pub fn bookmark_current(&mut self) -> Result<()> {
        let Ok(tab) = self.session.active_tab() else {
            return Ok(());
        };
        let url = tab.current_url().to_string();
        if url.is_empty() {
            return Ok(());
        }
        let title = tab.title().to_string();

        self.bookmarks.add(title, url);
        self.store.save(BOOKMARKS_DOC, &self.bookmarks)?;
        Ok(())
    }

    pub fn remove_bookmark(&mut self, url: &str) -> Result<()> {
        if self.bookmarks.remove(url) {
            self.store.save(BOOKMARKS_DOC, &self.bookmarks)?;
        }
        Ok(())
    }

    pub fn bookmarks(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    /// Navigate the active tab to a bookmarked url.
    pub fn open_bookmark(&mut self, url: &str) {
        self.with_active("open bookmark", |tab| tab.navigate(url));
    }

    // === Session persistence ===

    /// Snapshot the open tabs for the next start. A tab that never
    /// confirmed a load is saved as the homepage.
    pub fn save_session(&mut self) -> Result<()> {
        let tabs = self
            .session
            .iter()
            .map(|tab| {
                let url = tab.current_url();
                if url.is_empty() {
                    HOME_URL.to_string()
                } else {
                    url.to_string()
                }
            })
            .collect();
        let snapshot = SavedSession {
            tabs,
            active: self.session.active_index().unwrap_or(0),
        };
        self.store.save(SESSION_DOC, &snapshot)?;
        Ok(())
    }

    /// Replace the live tabs with the last saved snapshot. A missing or
    /// empty snapshot leaves the current session alone.
    pub fn restore_session(&mut self) -> Result<()> {
        let Some(snapshot) = self.store.load::<SavedSession>(SESSION_DOC)? else {
            return Ok(());
        };
        let mut urls = snapshot.tabs.iter();
        let Some(first_url) = urls.next() else {
            return Ok(());
        };

        let script = injection_script(&self.user_css);
        let mut first = Tab::create(first_url, (self.engines)());
        first.run_script(&script);
        let mut session = Session::new(first);
        for url in urls {
            let mut tab = Tab::create(url, (self.engines)());
            tab.run_script(&script);
            session.push(tab);
        }

        let ids = session.ids();
        let focus = snapshot.active.min(ids.len() - 1);
        let _ = session.set_active(ids[focus]);

        tracing::info!(tabs = ids.len(), "restored session");
        self.session = session;
        Ok(())
    }

    // === Display state (derived) ===

    /// Address-bar text: the focused tab's last confirmed url. A pending
    /// navigation leaves the previous url in place until the engine
    /// reports the new one.
    pub fn address_bar(&self) -> String {
        self.session
            .active_tab()
            .map(|tab| tab.current_url().to_string())
            .unwrap_or_default()
    }

    /// Window title: the focused tab's label, or the app name alone.
    pub fn window_title(&self) -> String {
        match self.session.active_tab() {
            Ok(tab) => format!("{} - {}", tab.display_title(), APP_NAME),
            Err(_) => APP_NAME.to_string(),
        }
    }

    /// Label for the tab `id`, as the tab strip shows it.
    pub fn tab_label(&self, id: TabId) -> Option<String> {
        self.session.get(id).ok().map(|tab| tab.display_title())
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.session.ids()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.session.active_tab().ok().map(|tab| tab.id())
    }

    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the active tab now and apply `op` to it.
    fn with_active(&mut self, what: &'static str, op: impl FnOnce(&mut Tab)) {
        match self.session.active_tab_mut() {
            Ok(tab) => op(tab),
            Err(_) => tracing::debug!(command = what, "ignored, session is empty"),
        }
    }
}
