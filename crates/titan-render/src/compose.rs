//! Full-document page composition.

use std::fmt::Write;

use titan_config::Config;

use crate::escape::escape_html;
use crate::files;
use crate::theme::{ThemeTokens, theme_css};

/// Shared page chrome: everything that repeats on every page.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    /// Top navigation fragment.
    pub nav: String,
    /// Footer fragment.
    pub footer: String,
    /// Floating cart widget fragment (empty when commerce is off).
    pub cart_widget: String,
    /// Client scripts appended at the end of `<body>`.
    pub scripts: Vec<String>,
}

/// Registration snippet for the service worker.
const SERVICE_WORKER_REGISTRATION: &str = "<script>\nif ('serviceWorker' in navigator) {\n  navigator.serviceWorker.register('service-worker.js');\n}\n</script>";

/// Assemble a full HTML document from section fragments and chrome.
///
/// Page identity (title, viewport, manifest link, theme color, font
/// loading, structured data and the theme stylesheet) is injected once
/// per page here, never per section.
pub fn compose_page(
    title: &str,
    sections: &[String],
    chrome: &Chrome,
    tokens: &ThemeTokens,
    config: &Config,
) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        escape_html(title),
        escape_html(&config.identity.name)
    );
    if !config.identity.tagline.is_empty() {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape_html(&config.identity.tagline)
        );
    }
    let _ = writeln!(html, "<link rel=\"manifest\" href=\"{}\">", files::MANIFEST);
    let _ = writeln!(
        html,
        "<meta name=\"theme-color\" content=\"{}\">",
        escape_html(&tokens.primary)
    );
    let _ = writeln!(
        html,
        "<link href=\"https://fonts.googleapis.com/css2?family={}:wght@700&family={}:wght@400;600&display=swap\" rel=\"stylesheet\">",
        font_query(&tokens.heading_font),
        font_query(&tokens.body_font)
    );
    let _ = writeln!(html, "<style>{}</style>", theme_css(tokens));
    structured_data(&mut html, config);
    html.push_str("</head>\n<body>\n");

    html.push_str(&chrome.nav);
    for section in sections {
        html.push_str(section);
    }
    html.push_str(&chrome.footer);
    html.push_str(&chrome.cart_widget);
    for script in &chrome.scripts {
        html.push_str(script);
    }
    html.push_str(SERVICE_WORKER_REGISTRATION);
    html.push_str("\n</body>\n</html>");
    html
}

/// Encode a font family name for the Google Fonts query string.
fn font_query(family: &str) -> String {
    escape_html(family).replace(' ', "+")
}

/// JSON-LD local-business block, emitted only when an identity URL is set.
fn structured_data(html: &mut String, config: &Config) {
    if config.identity.url.is_empty() {
        return;
    }
    let _ = writeln!(
        html,
        "<script type=\"application/ld+json\">{{\"@context\":\"https://schema.org\",\
         \"@type\":\"LocalBusiness\",\"name\":{name},\"url\":{url},\"telephone\":{phone}}}</script>",
        name = json_string(&config.identity.name),
        url = json_string(&config.identity.url),
        phone = json_string(&config.identity.phone),
    );
}

/// Minimal JSON string quoting for the structured-data block.
fn json_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
