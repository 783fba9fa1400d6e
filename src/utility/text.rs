//! HTML escaping.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for inclusion in HTML.
///
/// Text with nothing to escape is returned borrowed.
///
/// # Examples
///
/// ```rust
/// use overscore::utility::escape;
///
/// assert_eq!(escape("Curly, Larry & Moe"), "Curly, Larry &amp; Moe");
/// assert_eq!(escape("<a href=\"#\">it's</a>"), "&lt;a href=&quot;#&quot;&gt;it&#039;s&lt;/a&gt;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
