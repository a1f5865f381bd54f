//! The cart/checkout state machine.
//!
//! Two orthogonal state dimensions: whether the item sequence is empty
//! (drives the floating indicator) and whether the modal is open. Items
//! persist through [`CartStore`] under a fixed key so the cart survives
//! page reloads; the total is always recomputed from the sequence, never
//! cached alongside it.

use std::collections::HashMap;
use std::sync::RwLock;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// Storage key for the persisted cart sequence.
pub const STORAGE_KEY: &str = "titanCart";

/// One cart line. The price stays a string: it is displayed verbatim and
/// only parsed when a total is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: String,
}

/// Persistent key-value storage seam (localStorage in the browser).
pub trait CartStore {
    /// Load the persisted item sequence; empty when nothing was stored.
    fn load(&self) -> Vec<CartItem>;
    /// Persist the item sequence.
    fn save(&self, items: &[CartItem]);
    /// Remove the persisted sequence entirely.
    fn clear(&self);
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn load(&self) -> Vec<CartItem> {
        (**self).load()
    }

    fn save(&self, items: &[CartItem]) {
        (**self).save(items);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Outbound navigation requested by a cart event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Replace the current page (direct-checkout bypass).
    Redirect(String),
    /// Open a new browsing context (WhatsApp checkout).
    NewTab(String),
}

/// Payment identifiers baked into the checkout message.
#[derive(Debug, Clone, Default)]
pub struct CheckoutParams {
    /// Currency symbol shown next to prices.
    pub currency: String,
    /// WhatsApp target number, digits only.
    pub phone: String,
    /// Optional UPI id appended to the message.
    pub upi_id: String,
    /// Optional PayPal link appended to the message.
    pub paypal_link: String,
}

/// The cart state machine.
pub struct Cart<S: CartStore> {
    store: S,
    params: CheckoutParams,
    items: Vec<CartItem>,
    modal_open: bool,
}

impl<S: CartStore> Cart<S> {
    /// Create a cart, reloading any persisted items (reload survival).
    pub fn new(store: S, params: CheckoutParams) -> Self {
        let items = store.load();
        Self {
            store,
            params,
            items,
            modal_open: false,
        }
    }

    /// Current item sequence, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the checkout modal is open.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// The floating indicator is visible iff the cart is non-empty.
    pub fn indicator_visible(&self) -> bool {
        !self.items.is_empty()
    }

    /// Recompute the total from the item sequence.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| parse_price(&item.price)).sum()
    }

    /// Add an item, or bypass the cart entirely.
    ///
    /// A configured direct payment link longer than 5 characters wins: the
    /// caller navigates there immediately and the cart state is untouched.
    pub fn add_item(&mut self, name: &str, price: &str, direct_link: &str) -> Option<Handoff> {
        if direct_link.len() > 5 {
            return Some(Handoff::Redirect(direct_link.to_owned()));
        }
        self.items.push(CartItem {
            name: name.to_owned(),
            price: price.to_owned(),
        });
        self.store.save(&self.items);
        None
    }

    /// Remove the item at `index`, preserving the order of the rest.
    ///
    /// Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.store.save(&self.items);
        }
    }

    /// Flip the modal open/closed. Independent of the item sequence.
    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    /// Check out via the WhatsApp handoff URL.
    ///
    /// Builds the order message (one `- name (price)` line per item, the
    /// recomputed total, then any configured payment identifiers),
    /// percent-encodes it and returns the `wa.me` URL to open in a new
    /// browsing context. On completion the item sequence and its
    /// persisted copy are cleared and the modal closes.
    ///
    /// An empty cart is a no-op.
    pub fn checkout(&mut self) -> Option<Handoff> {
        if self.items.is_empty() {
            return None;
        }

        let mut message = String::from("Hi, I would like to place an order:\n");
        for item in &self.items {
            message.push_str(&format!(
                "- {} ({}{})\n",
                item.name, self.params.currency, item.price
            ));
        }
        message.push_str(&format!(
            "\nTotal: {}{:.2}",
            self.params.currency,
            self.total()
        ));
        if !self.params.upi_id.is_empty() {
            message.push_str(&format!("\n\nPayment via UPI: {}", self.params.upi_id));
        }
        if !self.params.paypal_link.is_empty() {
            message.push_str(&format!(
                "\n\nPayment via PayPal: {}",
                self.params.paypal_link
            ));
        }

        let url = format!(
            "https://wa.me/{}?text={}",
            self.params.phone,
            utf8_percent_encode(&message, NON_ALPHANUMERIC)
        );

        self.items.clear();
        self.store.clear();
        self.modal_open = false;
        Some(Handoff::NewTab(url))
    }
}

/// In-memory [`CartStore`] mimicking localStorage semantics: a string
/// value per key, the item sequence serialized as JSON.
///
/// # Example
///
/// ```
/// use titan_commerce::{Cart, CheckoutParams, MemoryStore};
///
/// let mut cart = Cart::new(MemoryStore::new(), CheckoutParams::default());
/// cart.add_item("Widget", "10", "");
/// assert!(cart.indicator_visible());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value under the cart key, as the browser would see it.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.values.read().unwrap().get(STORAGE_KEY).cloned()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Vec<CartItem> {
        self.raw()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save(&self, items: &[CartItem]) {
        if let Ok(json) = serde_json::to_string(items) {
            self.values
                .write()
                .unwrap()
                .insert(STORAGE_KEY.to_owned(), json);
        }
    }

    fn clear(&self) {
        self.values.write().unwrap().remove(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cart() -> Cart<MemoryStore> {
        Cart::new(
            MemoryStore::new(),
            CheckoutParams {
                currency: "$".to_owned(),
                phone: "966572562151".to_owned(),
                upi_id: String::new(),
                paypal_link: String::new(),
            },
        )
    }

    #[test]
    fn test_add_item_persists_and_shows_indicator() {
        let mut cart = cart();
        assert!(!cart.indicator_visible());
        cart.add_item("A", "$10", "");
        assert!(cart.indicator_visible());
        assert_eq!(cart.items().len(), 1);
        assert!(cart.store.raw().unwrap().contains("\"A\""));
    }

    #[test]
    fn test_total_sums_numeric_prefixes() {
        let mut cart = cart();
        cart.add_item("A", "$10", "");
        cart.add_item("B", "5", "");
        assert!((cart.total() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_price_contributes_zero() {
        let mut cart = cart();
        cart.add_item("C", "free", "");
        assert!(cart.total().abs() < f64::EPSILON);
    }

    #[test]
    fn test_direct_checkout_bypass_leaves_cart_unchanged() {
        let mut cart = cart();
        cart.add_item("A", "10", "");
        let handoff = cart.add_item("X", "20", "https://pay.example/abc");
        assert_eq!(
            handoff,
            Some(Handoff::Redirect("https://pay.example/abc".to_owned()))
        );
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_short_link_is_not_a_bypass() {
        let mut cart = cart();
        let handoff = cart.add_item("X", "20", "x");
        assert_eq!(handoff, None);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_item_preserves_order() {
        let mut cart = cart();
        cart.add_item("A", "1", "");
        cart.add_item("B", "2", "");
        cart.add_item("C", "3", "");
        cart.remove_item(1);
        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        cart.remove_item(99); // ignored
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_modal_toggle_is_independent_of_items() {
        let mut cart = cart();
        cart.toggle_modal();
        assert!(cart.modal_open());
        cart.toggle_modal();
        assert!(!cart.modal_open());
    }

    #[test]
    fn test_checkout_builds_encoded_url_and_clears_state() {
        let mut cart = cart();
        cart.add_item("Widget", "$10", "");
        cart.add_item("Gadget", "5", "");
        cart.toggle_modal();

        let Some(Handoff::NewTab(url)) = cart.checkout() else {
            panic!("expected a new-tab handoff");
        };
        assert!(url.starts_with("https://wa.me/966572562151?text="));
        assert!(url.contains("Widget"));
        // "Total: $15.00", percent-encoded
        assert!(url.contains("Total%3A%20%2415%2E00"));

        assert!(cart.items().is_empty());
        assert_eq!(cart.store.raw(), None);
        assert!(!cart.modal_open());
        assert!(!cart.indicator_visible());
    }

    #[test]
    fn test_checkout_appends_payment_identifiers() {
        let mut cart = Cart::new(
            MemoryStore::new(),
            CheckoutParams {
                currency: "$".to_owned(),
                phone: "1555".to_owned(),
                upi_id: "shop@upi".to_owned(),
                paypal_link: "https://paypal.me/shop".to_owned(),
            },
        );
        cart.add_item("A", "1", "");
        let Some(Handoff::NewTab(url)) = cart.checkout() else {
            panic!("expected a new-tab handoff");
        };
        assert!(url.contains("UPI"));
        assert!(url.contains("shop%40upi"));
        assert!(url.contains("PayPal"));
    }

    #[test]
    fn test_checkout_on_empty_cart_is_noop() {
        let mut cart = cart();
        assert_eq!(cart.checkout(), None);
    }

    #[test]
    fn test_cart_survives_reload() {
        let store = MemoryStore::new();
        {
            let mut cart = Cart::new(&store, CheckoutParams::default());
            cart.add_item("Keeper", "9", "");
        }
        let cart = Cart::new(&store, CheckoutParams::default());
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].name, "Keeper");
    }
}
