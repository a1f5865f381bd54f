//! Site assembly for Titan.
//!
//! [`assemble`] turns one configuration value into the complete ordered
//! file map of a deployable site: pages gated by the section toggles,
//! the PWA manifest and the service worker. Each call works on its own
//! configuration snapshot and produces a fresh bundle, so concurrent
//! generation requests cannot interfere.

mod manifest;
mod site;
mod worker;

pub use manifest::manifest;
pub use site::{SiteBundle, SiteFile, assemble};
pub use worker::service_worker;

// The output filename contract lives beside the renderers that link to it.
pub use titan_render::files;
