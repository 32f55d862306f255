//! Escaping helpers for hand-assembled HTML.
//!
//! The view and the page shell are assembled as plain strings, so every piece
//! of caller-supplied text passes through one of these functions first. Entity
//! escaping is `v_htmlescape`; the CSS and inline-JSON rules are local.

use std::borrow::Cow;
use std::fmt;

/// Escapes text for use between HTML tags.
pub fn escape_text(input: &str) -> impl fmt::Display + '_ {
    v_htmlescape::escape(input)
}

/// Escapes text for use inside a double- or single-quoted HTML attribute.
///
/// Same encoding as [`escape_text`]; quotes are always escaped, so the two
/// only differ in where the caller puts the result.
pub fn escape_attr(input: &str) -> impl fmt::Display + '_ {
    v_htmlescape::escape(input)
}

/// Strips characters that would end a single CSS declaration value.
///
/// A color like `red;background:url(x)` collapses to `redbackground:url(x)`,
/// which the browser rejects as one invalid value instead of applying two.
pub fn css_value(input: &str) -> Cow<'_, str> {
    let breaks_out = |c: char| matches!(c, ';' | '{' | '}');

    if input.contains(breaks_out) {
        Cow::Owned(input.chars().filter(|&c| !breaks_out(c)).collect())
    } else {
        Cow::Borrowed(input)
    }
}

/// Serializes a value as JSON that is safe to inline inside a `<script>` element.
///
/// `<` is written as `\u003c` so a string containing `</script>` cannot close
/// the element early. The result is still valid JSON (and a valid JS literal).
pub fn json_for_script<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}
