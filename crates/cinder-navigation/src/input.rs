//! Address bar input resolution.

use url::Url;

use cinder_engine::HOME_URL;

/// What an address-bar submission resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty submission; nothing to do.
    NoOp,
    /// The built-in homepage.
    Home,
    /// Input already carried a recognized scheme; navigate as typed.
    Verbatim(String),
    /// Host-shaped input promoted to an http url.
    Normalized(String),
    /// Free text turned into a search-engine query url.
    Search(String),
}

/// Default search engine template, `%s` replaced with the encoded query.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

const RECOGNIZED_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];

/// Turns user-entered address text into a navigable target.
#[derive(Debug, Clone)]
pub struct AddressResolver {
    search_template: String,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve `input`. Total over all inputs; malformed text is not an
    /// error, it becomes a search.
    pub fn resolve(&self, input: &str) -> Resolution {
        let input = input.trim();

        if input.is_empty() {
            return Resolution::NoOp;
        }

        if input == HOME_URL {
            return Resolution::Home;
        }

        if RECOGNIZED_SCHEMES
            .iter()
            .any(|scheme| input.starts_with(scheme))
        {
            return Resolution::Verbatim(input.to_string());
        }

        if looks_like_host(input) {
            let candidate = format!("http://{input}");
            if Url::parse(&candidate).is_ok() {
                return Resolution::Normalized(candidate);
            }
        }

        Resolution::Search(self.search_url(input))
    }

    fn search_url(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-shaped: no whitespace, an interior dot, not ending with one.
fn looks_like_host(input: &str) -> bool {
    !input.contains(char::is_whitespace) && input.contains('.') && !input.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_noop() {
        let resolver = AddressResolver::new();

        assert_eq!(resolver.resolve(""), Resolution::NoOp);
        assert_eq!(resolver.resolve("   "), Resolution::NoOp);
        assert_eq!(resolver.resolve("\t\n"), Resolution::NoOp);
    }

    #[test]
    fn home_sentinel_resolves_to_home() {
        let resolver = AddressResolver::new();

        assert_eq!(resolver.resolve("about:home"), Resolution::Home);
        assert_eq!(resolver.resolve("  about:home  "), Resolution::Home);
    }

    #[test]
    fn recognized_schemes_pass_through_verbatim() {
        let resolver = AddressResolver::new();

        assert_eq!(
            resolver.resolve("https://example.com"),
            Resolution::Verbatim("https://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("http://example.com/path?q=1"),
            Resolution::Verbatim("http://example.com/path?q=1".to_string())
        );
        assert_eq!(
            resolver.resolve("file:///tmp/page.html"),
            Resolution::Verbatim("file:///tmp/page.html".to_string())
        );
    }

    #[test]
    fn host_shaped_input_is_normalized() {
        let resolver = AddressResolver::new();

        assert_eq!(
            resolver.resolve("example.com"),
            Resolution::Normalized("http://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("docs.rs/serde"),
            Resolution::Normalized("http://docs.rs/serde".to_string())
        );
    }

    #[test]
    fn free_text_becomes_a_search() {
        let resolver = AddressResolver::new();

        match resolver.resolve("rust borrow checker") {
            Resolution::Search(url) => {
                assert!(url.starts_with("https://www.google.com/search?q="));
                assert!(url.contains("rust+borrow+checker"));
            }
            other => panic!("expected Search, got {other:?}"),
        }

        // A trailing dot does not read as a host.
        assert!(matches!(resolver.resolve("example."), Resolution::Search(_)));
        // Neither does dotless text.
        assert!(matches!(resolver.resolve("localhost"), Resolution::Search(_)));
    }

    #[test]
    fn custom_search_template_is_honored() {
        let resolver =
            AddressResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string());

        match resolver.resolve("cats and dogs") {
            Resolution::Search(url) => {
                assert_eq!(url, "https://duckduckgo.com/?q=cats+and+dogs");
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }
}
