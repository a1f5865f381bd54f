//! Quote-aware parsing of the external inventory/blog feed.
//!
//! The feed is a delimited-text document (typically a published Google
//! Sheet) with purely positional columns:
//! `[name, price, description, imageURL?, paymentLink?]`.
//! One parser is used everywhere a feed is consumed, so a field containing
//! the delimiter inside quotes never silently corrupts a row.

use tracing::debug;

/// One feed row mapped to its positional columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub name: String,
    pub price: String,
    pub description: String,
    /// Image column; `None` when blank (caller substitutes the fallback).
    pub image: Option<String>,
    /// Optional direct payment link column.
    pub payment_link: Option<String>,
}

/// What the card's action button does for this row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Direct "Buy Now" link (the payment column held a URL).
    BuyNow(String),
    /// Wire the add-to-cart event.
    AddToCart,
}

impl FeedItem {
    /// Decide the card action: a payment-link column that looks like a
    /// URL wins over the cart.
    #[must_use]
    pub fn action(&self) -> CardAction {
        match &self.payment_link {
            Some(link) if link.starts_with("http://") || link.starts_with("https://") => {
                CardAction::BuyNow(link.clone())
            }
            _ => CardAction::AddToCart,
        }
    }
}

/// Minimum columns a row needs to become a card.
const MIN_COLUMNS: usize = 2;

/// Parse a feed document into items.
///
/// The first line is the header and is always discarded. Blank rows and
/// rows with fewer than two columns are skipped, never fatal; a fetch
/// that returned garbage simply yields an empty item list.
pub fn parse_feed(text: &str) -> Vec<FeedItem> {
    let mut items = Vec::new();
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let columns = split_row(line);
        if columns.len() < MIN_COLUMNS {
            debug!(line, "skipping short feed row");
            continue;
        }
        let column = |index: usize| -> Option<String> {
            columns
                .get(index)
                .filter(|value| !value.is_empty())
                .cloned()
        };
        items.push(FeedItem {
            name: columns[0].clone(),
            price: columns[1].clone(),
            description: column(2).unwrap_or_default(),
            image: column(3),
            payment_link: column(4),
        });
    }
    items
}

/// Split one delimited row, honoring quoted fields.
///
/// A quoted field may contain the delimiter; a doubled quote inside a
/// quoted field is an escaped literal quote. Fields are trimmed.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(std::mem::take(&mut field).trim().to_owned());
                }
                _ => field.push(c),
            }
        }
    }
    fields.push(field.trim().to_owned());
    fields
}
