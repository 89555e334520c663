//! The embedded-engine capability consumed by the shell.

/// One embedded web engine instance, rendering the content of exactly one
/// tab.
///
/// The shell drives the engine through these operations and observes
/// nothing else directly; load progress, network failures and error pages
/// stay inside the engine. Completed navigations travel the other way: the
/// embedder watches the real engine and reports them through
/// `Shell::page_url_changed`.
///
/// Implementations are not required to be `Send` or `Sync`. An engine is
/// exclusively owned by its tab and every call happens on the one UI
/// thread.
pub trait PageEngine {
    /// Start loading `url`. Fire-and-forget; completion arrives later as a
    /// url-changed notification on the same thread.
    fn navigate(&mut self, url: &str);

    /// Step back in the engine's own history stack.
    fn back(&mut self);

    /// Step forward in the engine's own history stack.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// Render a static document in place of a network load.
    fn load_html(&mut self, html: &str);

    /// Execute `source` in the current page. The text is opaque to the
    /// caller and passed through verbatim.
    fn run_script(&mut self, source: &str);
}
