//! Cinder storage layer.
//!
//! One pretty-printed JSON document per name inside the data directory.
//! The shell persists three small documents (bookmarks, the saved session,
//! the user stylesheet); everything heavier belongs to the page engine.

mod error;
mod store;

pub use error::StorageError;
pub use store::Store;

pub type Result<T> = std::result::Result<T, StorageError>;
