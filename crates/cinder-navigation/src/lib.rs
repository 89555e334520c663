//! Cinder navigation.
//!
//! Address-bar input resolution (total: every input maps to a result,
//! never an error) and the in-memory visit log.

mod history;
mod input;

pub use history::{HistoryEntry, HistoryLog};
pub use input::{AddressResolver, Resolution, DEFAULT_SEARCH_TEMPLATE};
