//! Cinder core.
//!
//! Central coordination layer for the Cinder browser shell. The shell owns
//! all state; the embedder renders what the accessors expose and feeds
//! user gestures and engine notifications back in as method calls, all on
//! one logical UI thread (every mutation takes `&mut self`, so a
//! concurrent embedding has to marshal onto one thread to compile).

mod bookmarks;
mod config;
mod error;
mod shell;
mod snapshot;
mod user_css;

pub use bookmarks::{Bookmark, Bookmarks};
pub use config::{Config, APP_NAME};
pub use error::ShellError;
pub use shell::{EngineFactory, Shell};
pub use snapshot::SavedSession;
pub use user_css::{injection_script, DEFAULT_USER_CSS};

// Re-export core components
pub use cinder_engine::{PageEngine, HOMEPAGE_HTML, HOME_URL};
pub use cinder_navigation::{AddressResolver, HistoryEntry, HistoryLog, Resolution};
pub use cinder_storage::{Store, StorageError};
pub use cinder_tabs::{Session, Tab, TabError, TabId};

pub type Result<T> = std::result::Result<T, ShellError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
