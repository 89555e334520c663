//! User stylesheet injection.
//!
//! The stylesheet is applied by running a small script in each page that
//! installs (or replaces) a `<style>` element, with the CSS embedded as a
//! JSON-escaped string literal. The shell re-runs the script after every
//! confirmed navigation so the style persists across loads.

/// Stylesheet applied to every page until the user edits it.
pub const DEFAULT_USER_CSS: &str = r#"
:root { color-scheme: dark; }
html, body { background-color: #0b0f14 !important; color: #d7dade !important; }
img { max-width: 100%; height: auto; }
"#;

/// Id of the injected `<style>` element, so re-injection replaces instead
/// of stacking.
const STYLE_ELEMENT_ID: &str = "cinder-user-css";

/// Build the script that installs `css` into the current page.
pub fn injection_script(css: &str) -> String {
    let literal = js_string_literal(css);
    format!(
        r#"(function() {{
  try {{
    var css = {literal};
    var id = '{STYLE_ELEMENT_ID}';
    var existing = document.getElementById(id);
    if (existing) existing.remove();
    var style = document.createElement('style');
    style.id = id;
    style.appendChild(document.createTextNode(css));
    (document.head || document.documentElement).appendChild(style);
  }} catch (e) {{ console.error('user css inject', e); }}
}})();"#
    )
}

/// Encode `text` as a JavaScript string literal. JSON string syntax is a
/// subset of JS, so the JSON encoder does the escaping.
fn js_string_literal(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
