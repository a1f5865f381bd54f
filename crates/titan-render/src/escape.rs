//! HTML escaping for user-supplied text.

/// Escape HTML special characters in text content.
///
/// Every user-entered field that ends up as visible content or an
/// attribute value goes through this; generated pages never interpolate
/// owner text raw except for the documented trusted-embed fields.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
