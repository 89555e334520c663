//! The built-in homepage.

/// Sentinel target for the built-in homepage.
///
/// Not a fetchable URL. Tabs asked to show it render [`HOMEPAGE_HTML`]
/// through [`crate::PageEngine::load_html`] instead of navigating.
pub const HOME_URL: &str = "about:home";

/// The static homepage document. Fixed for the lifetime of the process.
pub const HOMEPAGE_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Cinder</title>
<style>
body{margin:0;font-family:Arial;background:#07101a;color:#d7dade;display:flex;flex-direction:column;align-items:center;justify-content:center;height:100vh}
a{color:#7bdff6;text-decoration:none;padding:8px 12px;border-radius:8px;background:#071a22;margin:6px;display:inline-block}
input{padding:12px;border-radius:24px;border:1px solid #203139;width:360px;background:#02121a;color:#cfe7ee}
.links{margin-top:18px}
footer{position:fixed;bottom:6px;color:#6b7d83;font-size:12px}
</style>
</head>
<body>
<h1 style="font-weight:300">Cinder</h1>
<input id="q" placeholder="Search or enter URL" onkeypress="if(event.key==='Enter'){location.href='https://www.google.com/search?q='+encodeURIComponent(this.value)}">
<div class="links">
<a href="https://www.youtube.com">YouTube</a>
<a href="https://www.google.com">Google</a>
<a href="https://github.com">GitHub</a>
</div>
<footer>&copy; Cinder</footer>
</body>
</html>
"#;
