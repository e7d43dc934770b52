//! Escaping helpers shared by the pipeline stages.

/// Escape `&`, `<` and `>` for HTML text content.
///
/// `&` is replaced first so entities produced by the later replacements are
/// not escaped a second time.
///
/// # Examples
///
/// ```
/// use reddot_markdown::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value for use inside a double-quoted attribute.
///
/// Applies [`escape_html`] and additionally replaces `"`.
pub fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

/// Replace `"` in text that has already been entity-escaped.
///
/// Captured URLs and alt text are bound into attribute values after the
/// escaping stage, so only the quote remains to be neutralized.
pub(crate) fn quote_escaped(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Check whether a line starts with an HTML tag (`<` followed by an ASCII letter).
pub(crate) fn starts_with_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
