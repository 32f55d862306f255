//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::Value;
use stroop::config::{Config, RenderMode};

/// Creates a config with deterministic defaults and the given default mode.
pub fn test_config(mode: RenderMode) -> Config {
    let mut config = Config::new();
    config.page.mode = mode;
    config
}

/// Returns the text between `start` and the next `end` after it.
pub fn between<'a>(haystack: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = haystack.find(start)? + start.len();
    let len = haystack[from..].find(end)?;
    Some(&haystack[from..from + len])
}

/// Parses the hydration data embedded in a rendered page.
pub fn hydration_data(html: &str) -> Option<Value> {
    let json = between(
        html,
        r#"<script type="application/json" id="stroop-data">"#,
        "</script>",
    )?;
    serde_json::from_str(json).ok()
}

/// Returns the visible text of the rendered heading.
pub fn heading_text(html: &str) -> Option<&str> {
    let heading = between(html, "<h1 ", "</h1>")?;
    heading.split_once('>').map(|(_, text)| text)
}

/// Returns the inline style attribute of the rendered heading.
pub fn heading_style(html: &str) -> Option<&str> {
    between(html, r#"<h1 style=""#, r#"">"#)
}
