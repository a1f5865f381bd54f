//! The constrained markup subset for long-form text blocks.
//!
//! Owners write about-page and legal text with three constructs:
//! `**bold**` spans, `* ` bullet lines, and whole-line bold sub-headings.
//! Everything else becomes a paragraph. This is a single-pass line state
//! machine whose only state is "inside a bullet list".

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;

/// Inline `**bold**` span.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// A line that is entirely a single bold span, i.e. a sub-heading.
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^*]+)\*\*$").unwrap());

/// Convert a constrained-markup text block into an HTML fragment.
///
/// - `**bold**` spans become `<strong>`
/// - a line that is entirely one bold span becomes an `<h3>` sub-heading
/// - consecutive `* ` lines group into a single `<ul>`; any non-bullet
///   line closes the open list
/// - other non-blank lines become `<p>` paragraphs
/// - blank lines are skipped without affecting state
///
/// Input text is HTML-escaped before the bold substitution.
pub fn format_text(raw: &str) -> String {
    let mut html = String::with_capacity(raw.len());
    let mut in_list = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("* ") {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(&inline(item));
            html.push_str("</li>");
            continue;
        }

        if in_list {
            html.push_str("</ul>");
            in_list = false;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            html.push_str("<h3>");
            html.push_str(&escape_html(&caps[1]));
            html.push_str("</h3>");
        } else {
            html.push_str("<p>");
            html.push_str(&inline(trimmed));
            html.push_str("</p>");
        }
    }

    if in_list {
        html.push_str("</ul>");
    }

    html
}

/// Escape a line and substitute bold spans.
fn inline(text: &str) -> String {
    BOLD.replace_all(&escape_html(text), "<strong>$1</strong>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whole_line_bold_is_subheading() {
        assert_eq!(format_text("**Hi**"), "<h3>Hi</h3>");
    }

    #[test]
    fn test_partial_bold_is_paragraph() {
        assert_eq!(
            format_text("**Hi** there"),
            "<p><strong>Hi</strong> there</p>"
        );
    }

    #[test]
    fn test_two_spans_do_not_make_a_heading() {
        assert_eq!(
            format_text("**a** and **b**"),
            "<p><strong>a</strong> and <strong>b</strong></p>"
        );
    }

    #[test]
    fn test_bullets_group_into_one_list() {
        assert_eq!(
            format_text("* one\n* two\nafter"),
            "<ul><li>one</li><li>two</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(format_text("first\n\nsecond"), "<p>first</p><p>second</p>");
    }

    #[test]
    fn test_trailing_list_is_closed() {
        assert_eq!(format_text("intro\n* a\n* b"), "<p>intro</p><ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            format_text("5 < 6 & **<b>**"),
            "<p>5 &lt; 6 &amp; <strong>&lt;b&gt;</strong></p>"
        );
    }
}
