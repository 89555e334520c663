//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("no tab with id {0}")]
    InvalidTabReference(TabId),

    #[error("session has no active tab")]
    NoActiveTab,
}
