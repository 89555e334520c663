//! Cinder page-engine boundary.
//!
//! Everything that actually renders web content lives on the far side of
//! the [`PageEngine`] trait: page loads, script execution, HTTP, history
//! stacks, error pages. The shell only drives the trait and owns the two
//! pieces of content that are not the engine's business, the home sentinel
//! and the embedded homepage document.

mod engine;
mod homepage;
pub mod mock;

pub use engine::PageEngine;
pub use homepage::{HOMEPAGE_HTML, HOME_URL};
