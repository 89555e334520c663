//! Shell error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("tab error: {0}")]
    Tab(#[from] cinder_tabs::TabError),

    #[error("storage error: {0}")]
    Storage(#[from] cinder_storage::StorageError),
}
