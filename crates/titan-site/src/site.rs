//! The site assembler: configuration snapshot in, ordered file map out.

use titan_commerce::{CheckoutParams, LoaderKind, LoaderParams, cart_script, loader_script};
use titan_config::Config;
use titan_render::{Chrome, compose_page, files, resolve_theme, section};
use tracing::info;

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Output filename, from the fixed contract in [`files`].
    pub name: String,
    /// Full file content.
    pub content: String,
}

/// Ordered name → content map for one generated site.
#[derive(Debug, Default)]
pub struct SiteBundle {
    files: Vec<SiteFile>,
}

impl SiteBundle {
    fn push(&mut self, name: &str, content: String) {
        self.files.push(SiteFile {
            name: name.to_owned(),
            content,
        });
    }

    /// Files in emission order.
    #[must_use]
    pub fn files(&self) -> &[SiteFile] {
        &self.files
    }

    /// Content of a file by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.content.as_str())
    }

    /// Filenames in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name.as_str()).collect()
    }
}

/// Whether the cart/commerce machinery is active for this configuration.
fn commerce_active(config: &Config) -> bool {
    config.sections.inventory && !config.inventory.feed_url.is_empty()
}

/// Whether the blog page exists for this configuration.
fn blog_active(config: &Config) -> bool {
    config.sections.blog && !config.blog.feed_url.is_empty()
}

/// Assemble the complete site for one configuration snapshot.
///
/// Always emits the home page, manifest and service worker; every other
/// page is gated on its section toggle. The returned bundle is built
/// fresh on every call.
#[must_use]
pub fn assemble(config: &Config) -> SiteBundle {
    let tokens = resolve_theme(&config.theme);
    let checkout = CheckoutParams {
        currency: config.commerce.currency.clone(),
        phone: config.identity.phone.clone(),
        upi_id: config.commerce.upi_id.clone(),
        paypal_link: config.commerce.paypal_link.clone(),
    };

    let chrome = Chrome {
        nav: section::nav(config),
        footer: section::footer(config),
        cart_widget: if commerce_active(config) {
            section::cart_widget()
        } else {
            String::new()
        },
        scripts: if commerce_active(config) {
            vec![cart_script(&checkout)]
        } else {
            Vec::new()
        },
    };

    let mut bundle = SiteBundle::default();

    // Home page, with the inventory loader when the store is active.
    let mut home_chrome = chrome.clone();
    if commerce_active(config) {
        home_chrome.scripts.push(loader_script(&LoaderParams {
            kind: LoaderKind::Inventory,
            feed_url: config.inventory.feed_url.clone(),
            fallback_image: config.inventory.fallback_image.clone(),
            currency: config.commerce.currency.clone(),
        }));
    }
    bundle.push(
        files::INDEX,
        compose_page(
            "Home",
            &section::home_sections(config),
            &home_chrome,
            &tokens,
            config,
        ),
    );

    if config.sections.about {
        bundle.push(
            files::ABOUT,
            compose_page(
                "About",
                &[section::about_page(config)],
                &chrome,
                &tokens,
                config,
            ),
        );
    }

    if config.sections.contact {
        bundle.push(
            files::CONTACT,
            compose_page(
                "Contact",
                &[section::contact_page(config)],
                &chrome,
                &tokens,
                config,
            ),
        );
    }

    if config.sections.booking {
        bundle.push(
            files::BOOKING,
            compose_page(
                &config.booking.title,
                &[section::booking_page(config)],
                &chrome,
                &tokens,
                config,
            ),
        );
    }

    if blog_active(config) {
        let mut blog_chrome = chrome.clone();
        blog_chrome.scripts.push(loader_script(&LoaderParams {
            kind: LoaderKind::Blog,
            feed_url: config.blog.feed_url.clone(),
            fallback_image: config.inventory.fallback_image.clone(),
            currency: config.commerce.currency.clone(),
        }));
        bundle.push(
            files::BLOG,
            compose_page(
                "Blog",
                &[section::blog_shell()],
                &blog_chrome,
                &tokens,
                config,
            ),
        );
    }

    if config.sections.legal {
        bundle.push(
            files::PRIVACY,
            compose_page(
                "Privacy Policy",
                &[section::legal_page("Privacy Policy", &config.legal.privacy)],
                &chrome,
                &tokens,
                config,
            ),
        );
        bundle.push(
            files::TERMS,
            compose_page(
                "Terms of Service",
                &[section::legal_page("Terms of Service", &config.legal.terms)],
                &chrome,
                &tokens,
                config,
            ),
        );
    }

    bundle.push(files::MANIFEST, crate::manifest(config));
    bundle.push(files::SERVICE_WORKER, crate::service_worker());

    info!(pages = bundle.files().len(), "assembled site bundle");
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use titan_config::Config;

    fn store_config() -> Config {
        let mut config = Config::default();
        config.identity.phone = "966572562151".to_owned();
        config.inventory.feed_url = "https://sheets.example/pub?output=csv".to_owned();
        config
    }

    #[test]
    fn test_always_emits_core_files() {
        let bundle = assemble(&Config::default());
        assert!(bundle.get(files::INDEX).is_some());
        assert!(bundle.get(files::MANIFEST).is_some());
        assert!(bundle.get(files::SERVICE_WORKER).is_some());
    }

    #[test]
    fn test_booking_toggle_gates_page_and_nav() {
        let mut config = store_config();
        config.sections.booking = true;
        let bundle = assemble(&config);
        assert!(bundle.get(files::BOOKING).is_some());
        assert!(bundle.get(files::INDEX).unwrap().contains("Book Now"));

        config.sections.booking = false;
        let bundle = assemble(&config);
        assert!(bundle.get(files::BOOKING).is_none());
        // The link disappears from every page's navigation.
        for file in bundle.files() {
            if file.name.ends_with(".html") {
                assert!(!file.content.contains("Book Now"), "{} links booking", file.name);
            }
        }
    }

    #[test]
    fn test_legal_pages_emitted_together() {
        let mut config = store_config();
        config.sections.legal = true;
        let bundle = assemble(&config);
        assert!(bundle.get(files::PRIVACY).is_some());
        assert!(bundle.get(files::TERMS).is_some());
    }

    #[test]
    fn test_blog_requires_toggle_and_feed() {
        let mut config = store_config();
        config.sections.blog = true;
        config.blog.feed_url = String::new();
        let bundle = assemble(&config);
        assert!(bundle.get(files::BLOG).is_none());

        config.blog.feed_url = "https://sheets.example/posts".to_owned();
        let bundle = assemble(&config);
        let blog = bundle.get(files::BLOG).unwrap();
        assert!(blog.contains("blog-grid"));
        assert!(blog.contains("https://sheets.example/posts"));
    }

    #[test]
    fn test_commerce_machinery_requires_store() {
        let bundle = assemble(&store_config());
        let home = bundle.get(files::INDEX).unwrap();
        assert!(home.contains("cart-float"));
        assert!(home.contains("checkoutWhatsApp"));
        assert!(home.contains("inv-grid"));

        let mut config = store_config();
        config.inventory.feed_url = String::new();
        let bundle = assemble(&config);
        let home = bundle.get(files::INDEX).unwrap();
        assert!(!home.contains("cart-float"));
        assert!(!home.contains("checkoutWhatsApp"));
    }

    #[test]
    fn test_cart_script_carries_payment_identifiers() {
        let mut config = store_config();
        config.commerce.upi_id = "shop@upi".to_owned();
        let bundle = assemble(&config);
        assert!(bundle.get(files::INDEX).unwrap().contains("const upiId = \"shop@upi\";"));
    }

    #[test]
    fn test_emission_order_is_stable() {
        let mut config = store_config();
        config.sections.legal = true;
        let bundle = assemble(&config);
        let names = bundle.names();
        assert_eq!(names.first(), Some(&files::INDEX));
        assert_eq!(names.last(), Some(&files::SERVICE_WORKER));
        let manifest_pos = names.iter().position(|n| *n == files::MANIFEST).unwrap();
        assert_eq!(manifest_pos, names.len() - 2);
    }

    #[test]
    fn test_each_call_builds_a_fresh_bundle() {
        let config = store_config();
        let first = assemble(&config);
        let second = assemble(&config);
        assert_eq!(first.files(), second.files());
    }
}
