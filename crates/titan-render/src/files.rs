//! The fixed output-filename contract.
//!
//! Navigation and footer renderers link to these names and the site
//! assembler emits them; both sides use these constants so the contract
//! cannot drift.

pub const INDEX: &str = "index.html";
pub const ABOUT: &str = "about.html";
pub const CONTACT: &str = "contact.html";
pub const BOOKING: &str = "booking.html";
pub const BLOG: &str = "blog.html";
pub const PRIVACY: &str = "privacy.html";
pub const TERMS: &str = "terms.html";
pub const MANIFEST: &str = "manifest.json";
pub const SERVICE_WORKER: &str = "service-worker.js";
