//! Cinder tab management.
//!
//! A [`Tab`] owns exactly one page engine for as long as it lives. The
//! [`Session`] owns the tabs in display order together with the single
//! active slot that every toolbar command is resolved against at call time.

mod error;
mod session;
mod tab;

pub use error::TabError;
pub use session::Session;
pub use tab::{Tab, TabId, DEFAULT_TAB_TITLE};

pub type Result<T> = std::result::Result<T, TabError>;
