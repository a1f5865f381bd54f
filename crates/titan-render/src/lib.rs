//! Content parsing, theme resolution and HTML rendering for Titan.
//!
//! This crate turns a loaded configuration into page markup:
//!
//! - [`parse_delimited_list`] / [`parse_faq`]: lenient line-oriented
//!   parsers for the delimited text-area content blocks
//! - [`format_text`]: the constrained markup subset (bold spans, bullet
//!   lists, bold-line sub-headings)
//! - [`resolve_theme`]: configuration → immutable [`ThemeTokens`]
//! - [`section`]: one pure renderer per page section
//! - [`compose_page`]: full-document assembly from section fragments
//!
//! All rendering is pure string building; nothing here performs I/O.
//! User-supplied text is HTML-escaped by default via [`escape_html`];
//! the only raw interpolations are the documented trusted-embed fields
//! (booking embed, map embed).

mod compose;
mod content;
mod escape;
pub mod files;
mod markup;
pub mod section;
mod theme;

pub use compose::{Chrome, compose_page};
pub use content::{ContentRecord, FaqEntry, parse_delimited_list, parse_faq};
pub use escape::escape_html;
pub use markup::format_text;
pub use theme::{ThemeTokens, resolve_theme, theme_css};
