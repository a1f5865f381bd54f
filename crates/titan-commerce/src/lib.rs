//! Cart/checkout engine, feed parsing and client script generation.
//!
//! The cart is the one piece of generated behavior that runs unsupervised
//! in an end-user browser. Its state machine is modeled here in Rust
//! ([`Cart`]) against pluggable storage ([`CartStore`]), so the semantics
//! are typed and tested; [`cart_script`] emits the equivalent JavaScript
//! that ships inside every generated page.
//!
//! The same split applies to the inventory/blog feed: [`parse_feed`] is
//! the canonical quote-aware delimited parser, and [`loader_script`]
//! emits the client-side loader that fetches the feed at page-load time.

mod cart;
mod feed;
mod price;
mod script;

pub use cart::{Cart, CartItem, CartStore, CheckoutParams, Handoff, MemoryStore, STORAGE_KEY};
pub use feed::{CardAction, FeedItem, parse_feed};
pub use price::parse_price;
pub use script::{LoaderKind, LoaderParams, cart_script, loader_script};
