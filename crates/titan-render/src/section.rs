//! Section renderers: one pure function per page section.
//!
//! Every renderer takes the configuration (and, where relevant, resolved
//! theme tokens or parsed content) and returns an HTML fragment. None of
//! them performs I/O, and none assumes an optional field is non-empty:
//! missing images, links and identifiers degrade to omitted markup or a
//! text fallback.

use std::fmt::Write;

use titan_config::Config;

use crate::content::{parse_delimited_list, parse_faq};
use crate::escape::escape_html;
use crate::files;
use crate::markup::format_text;

/// Fixed home-page section order: hero, stats, features, pricing,
/// inventory, about, testimonials, faq, cta. Booking, blog and legal
/// content live on their own pages; nav and footer are shared chrome.
pub fn home_sections(config: &Config) -> Vec<String> {
    let toggles = &config.sections;
    let mut sections = Vec::new();
    if toggles.hero {
        sections.push(hero(config));
    }
    if toggles.stats {
        sections.push(stats(config));
    }
    if toggles.features {
        sections.push(features(config));
    }
    if toggles.pricing {
        sections.push(pricing(config));
    }
    if toggles.inventory && !config.inventory.feed_url.is_empty() {
        sections.push(inventory_shell(config));
    }
    if toggles.about {
        sections.push(about_home(config));
    }
    if toggles.testimonials {
        sections.push(testimonials(config));
    }
    if toggles.faq {
        sections.push(faq(config));
    }
    if toggles.cta {
        sections.push(cta(config));
    }
    sections
}

/// Top navigation bar.
///
/// Links only to pages that actually exist for this configuration; the
/// filenames come from [`crate::files`], the same constants the assembler
/// emits.
pub fn nav(config: &Config) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<nav><div class=\"container nav-flex\">");

    // Wordmark: logo image when configured, text fallback otherwise.
    if config.identity.logo_url.is_empty() {
        let _ = write!(
            html,
            "<div style=\"font-weight:900; font-size:1.5rem; color:var(--p)\">{}</div>",
            escape_html(&config.identity.name)
        );
    } else {
        let _ = write!(
            html,
            "<img src=\"{}\" alt=\"{}\" style=\"height:40px\">",
            escape_html(&config.identity.logo_url),
            escape_html(&config.identity.name)
        );
    }

    html.push_str("<div>");
    nav_link(&mut html, files::INDEX, "Home");
    if config.sections.about {
        nav_link(&mut html, files::ABOUT, "About");
    }
    if config.sections.booking {
        nav_link(&mut html, files::BOOKING, "Book Now");
    }
    if config.sections.blog && !config.blog.feed_url.is_empty() {
        nav_link(&mut html, files::BLOG, "Blog");
    }
    if config.sections.contact {
        nav_link(&mut html, files::CONTACT, "Contact");
    }
    if config.sections.inventory && !config.inventory.feed_url.is_empty() {
        nav_link(&mut html, "index.html#inventory", "Store");
    }
    if !config.identity.phone.is_empty() {
        let _ = write!(
            html,
            "<a href=\"tel:{}\" class=\"btn btn-accent\">Call Us</a>",
            escape_html(&config.identity.phone)
        );
    }
    html.push_str("</div></div></nav>");
    html
}

fn nav_link(html: &mut String, href: &str, label: &str) {
    let _ = write!(
        html,
        "<a href=\"{href}\" class=\"btn\" style=\"background:transparent; color:var(--txt)\">{label}</a>"
    );
}

/// Hero header.
pub fn hero(config: &Config) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(
        "<header style=\"background:var(--p); color:white; padding:80px 0; text-align:center;\">\
         <div class=\"container\">",
    );
    let _ = write!(
        html,
        "<h1 style=\"color:white; font-size:3rem;\">{}</h1>",
        escape_html(&config.hero.headline)
    );
    let _ = write!(
        html,
        "<p style=\"font-size:1.2rem; opacity:0.9; max-width:700px; margin:0 auto 2rem auto;\">{}</p>",
        escape_html(&config.hero.subtext)
    );
    if config.sections.inventory && !config.inventory.feed_url.is_empty() {
        html.push_str("<a href=\"#inventory\" class=\"btn btn-accent\">Explore Offerings</a>");
    } else if config.sections.booking {
        let _ = write!(
            html,
            "<a href=\"{}\" class=\"btn btn-accent\">Book Now</a>",
            files::BOOKING
        );
    }
    for image in [&config.hero.image_1, &config.hero.image_2] {
        if !image.is_empty() {
            let _ = write!(
                html,
                "<img src=\"{}\" alt=\"\" style=\"width:45%; max-width:560px; border-radius:12px; margin:2rem 0.5rem 0;\">",
                escape_html(image)
            );
        }
    }
    html.push_str("</div></header>");
    html
}

/// Stats strip: one `value | label` card per line.
pub fn stats(config: &Config) -> String {
    let records = parse_delimited_list(&config.stats.items, "|", 2);
    if records.is_empty() {
        return String::new();
    }
    let mut html = String::with_capacity(256);
    html.push_str("<section style=\"padding:3rem 0;\"><div class=\"container grid-3\">");
    for record in &records {
        let _ = write!(
            html,
            "<div class=\"card\" style=\"text-align:center;\"><h3 style=\"font-size:2rem; margin:0;\">{}</h3><p>{}</p></div>",
            escape_html(record.field(0)),
            escape_html(record.field(1))
        );
    }
    html.push_str("</div></section>");
    html
}

/// Feature grid: one `icon | Title | Description` card per line.
pub fn features(config: &Config) -> String {
    let records = parse_delimited_list(&config.features.items, "|", 3);
    let mut cards = String::new();
    for record in &records {
        let _ = write!(
            cards,
            "<div class=\"card\"><h3 style=\"font-size:1.2rem;\">{}</h3><p>{}</p></div>",
            escape_html(record.field(1)),
            escape_html(record.field(2))
        );
    }
    format!(
        "<section style=\"padding:4rem 0;\"><div class=\"container\">\
         <h2 style=\"text-align:center; margin-bottom:2rem;\">{}</h2>\
         <div class=\"grid-3\">{cards}</div></div></section>",
        escape_html(&config.features.title)
    )
}

/// Pricing table: one `Name | Price | Description` card per line.
pub fn pricing(config: &Config) -> String {
    let records = parse_delimited_list(&config.pricing.plans, "|", 3);
    if records.is_empty() {
        return String::new();
    }
    let mut cards = String::new();
    for record in &records {
        let _ = write!(
            cards,
            "<div class=\"card\" style=\"text-align:center;\"><h3>{}</h3>\
             <p style=\"color:var(--s); font-weight:bold; font-size:1.5rem;\">{}</p><p>{}</p></div>",
            escape_html(record.field(0)),
            escape_html(record.field(1)),
            escape_html(record.field(2))
        );
    }
    format!(
        "<section style=\"padding:4rem 0;\"><div class=\"container\">\
         <h2 style=\"text-align:center; margin-bottom:2rem;\">{}</h2>\
         <div class=\"grid-3\">{cards}</div></div></section>",
        escape_html(&config.pricing.title)
    )
}

/// Inventory shell: the grid placeholder filled in by the client loader.
pub fn inventory_shell(_config: &Config) -> String {
    "<section id=\"inventory\" style=\"padding:4rem 0;\"><div class=\"container\">\
     <h2 style=\"text-align:center; margin-bottom:3rem;\">Our Inventory</h2>\
     <div id=\"inv-grid\" class=\"grid-3\"><p>Loading Products...</p></div>\
     </div></section>"
        .to_owned()
}

/// Blog shell: the grid placeholder filled in by the client loader.
pub fn blog_shell() -> String {
    "<section id=\"blog\" style=\"padding:4rem 0;\"><div class=\"container\">\
     <h2 style=\"text-align:center; margin-bottom:3rem;\">Latest Posts</h2>\
     <div id=\"blog-grid\" class=\"grid-3\"><p>Loading Posts...</p></div>\
     </div></section>"
        .to_owned()
}

/// About section on the home page: side image plus short copy.
pub fn about_home(config: &Config) -> String {
    let mut html = String::with_capacity(384);
    html.push_str(
        "<section style=\"padding:4rem 0;\"><div class=\"container\" \
         style=\"display:flex; gap:3rem; align-items:center; flex-wrap:wrap;\">",
    );
    if !config.about.image.is_empty() {
        let _ = write!(
            html,
            "<div style=\"flex:1;\"><img src=\"{}\" alt=\"\" style=\"width:100%; border-radius:12px;\"></div>",
            escape_html(&config.about.image)
        );
    }
    let _ = write!(
        html,
        "<div style=\"flex:1;\"><h2>{}</h2><p>{}</p></div>",
        escape_html(&config.about.title),
        escape_html(&config.about.short)
    );
    html.push_str("</div></section>");
    html
}

/// About page body: long-form text in the constrained markup subset,
/// falling back to the short copy when no long text is set.
pub fn about_page(config: &Config) -> String {
    let text = if config.about.long.is_empty() {
        &config.about.short
    } else {
        &config.about.long
    };
    format!(
        "<div class=\"container\" style=\"padding:4rem 0; min-height:60vh;\"><h1>{}</h1>{}</div>",
        escape_html(&config.about.title),
        format_text(text)
    )
}

/// Testimonials: one `Name | Quote` card per line.
pub fn testimonials(config: &Config) -> String {
    let records = parse_delimited_list(&config.testimonials.items, "|", 2);
    if records.is_empty() {
        return String::new();
    }
    let mut cards = String::new();
    for record in &records {
        let _ = write!(
            cards,
            "<div class=\"card\"><p style=\"font-style:italic;\">\u{201c}{}\u{201d}</p>\
             <p style=\"font-weight:bold; margin-bottom:0;\">{}</p></div>",
            escape_html(record.field(1)),
            escape_html(record.field(0))
        );
    }
    format!(
        "<section style=\"padding:4rem 0;\"><div class=\"container\">\
         <h2 style=\"text-align:center; margin-bottom:2rem;\">{}</h2>\
         <div class=\"grid-3\">{cards}</div></div></section>",
        escape_html(&config.testimonials.title)
    )
}

/// FAQ: a `<details>` block per `Question :: Answer` line.
pub fn faq(config: &Config) -> String {
    let entries = parse_faq(&config.faq.items);
    if entries.is_empty() {
        return String::new();
    }
    let mut blocks = String::new();
    for entry in &entries {
        let _ = write!(
            blocks,
            "<details class=\"card\" style=\"margin-bottom:1rem;\"><summary style=\"font-weight:bold; cursor:pointer;\">{}</summary><p>{}</p></details>",
            escape_html(&entry.question),
            escape_html(&entry.answer)
        );
    }
    format!(
        "<section style=\"padding:4rem 0;\"><div class=\"container\" style=\"max-width:800px;\">\
         <h2 style=\"text-align:center; margin-bottom:2rem;\">{}</h2>{blocks}</div></section>",
        escape_html(&config.faq.title)
    )
}

/// Call-to-action banner.
pub fn cta(config: &Config) -> String {
    let href = if !config.cta.button_link.is_empty() {
        escape_html(&config.cta.button_link)
    } else if config.sections.booking {
        files::BOOKING.to_owned()
    } else if !config.identity.phone.is_empty() {
        format!("tel:{}", escape_html(&config.identity.phone))
    } else {
        String::new()
    };
    let mut html = format!(
        "<section style=\"background:var(--s); color:white; padding:4rem 0; text-align:center;\">\
         <div class=\"container\"><h2 style=\"color:white;\">{}</h2>",
        escape_html(&config.cta.headline)
    );
    if !href.is_empty() {
        let _ = write!(
            html,
            "<a href=\"{href}\" class=\"btn\" style=\"background:white; color:var(--s);\">{}</a>",
            escape_html(&config.cta.button_label)
        );
    }
    html.push_str("</div></section>");
    html
}

/// Footer: identity, socials and legal links.
pub fn footer(config: &Config) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(
        "<footer style=\"background:var(--p); color:white; padding:3rem 0; text-align:center; margin-top:auto;\"><div class=\"container\">",
    );
    let _ = write!(html, "<h3 style=\"color:white;\">{}</h3>", escape_html(&config.identity.name));
    if !config.identity.tagline.is_empty() {
        let _ = write!(html, "<p style=\"opacity:0.8;\">{}</p>", escape_html(&config.identity.tagline));
    }
    if !config.identity.address.is_empty() {
        let _ = write!(html, "<p>{}</p>", escape_html(&config.identity.address));
    }
    if !config.identity.email.is_empty() {
        let _ = write!(
            html,
            "<p><a href=\"mailto:{0}\" style=\"color:white;\">{0}</a></p>",
            escape_html(&config.identity.email)
        );
    }

    let socials = [
        (&config.social.facebook, "Facebook"),
        (&config.social.instagram, "Instagram"),
        (&config.social.x, "X"),
    ];
    if socials.iter().any(|(link, _)| !link.is_empty()) {
        html.push_str("<div style=\"margin-top:1rem;\">");
        for (link, label) in socials {
            if !link.is_empty() {
                let _ = write!(
                    html,
                    "<a href=\"{}\" style=\"color:white; margin:0 10px;\">{label}</a>",
                    escape_html(link)
                );
            }
        }
        html.push_str("</div>");
    }

    if config.sections.legal {
        let _ = write!(
            html,
            "<div style=\"margin-top:1rem;\"><a href=\"{}\" style=\"color:white; margin:0 10px;\">Privacy</a><a href=\"{}\" style=\"color:white; margin:0 10px;\">Terms</a></div>",
            files::PRIVACY,
            files::TERMS
        );
    }

    let _ = write!(
        html,
        "<p style=\"opacity:0.5; font-size:0.8rem; margin-top:2rem;\">&copy; {}. Powered by Titan Engine.</p>",
        escape_html(&config.identity.name)
    );
    html.push_str("</div></footer>");
    html
}

/// Floating cart button, overlay and checkout modal.
///
/// The cart script toggles visibility; the button is hidden until the
/// cart is non-empty.
pub fn cart_widget() -> String {
    "<div id=\"cart-float\" onclick=\"toggleCart()\" style=\"display:none;\">\
     <span>\u{1f6d2}</span> <span id=\"cart-count\">0</span></div>\
     <div id=\"cart-overlay\" onclick=\"toggleCart()\"></div>\
     <div id=\"cart-modal\"><h3>Your Cart</h3>\
     <div id=\"cart-items\" style=\"max-height:300px; overflow-y:auto; margin:1rem 0;\"></div>\
     <div style=\"font-weight:bold; font-size:1.2rem; margin-bottom:1rem; text-align:right;\">Total: <span id=\"cart-total\">0.00</span></div>\
     <button onclick=\"checkoutWhatsApp()\" class=\"btn btn-accent\" style=\"width:100%\">Checkout via WhatsApp</button></div>"
        .to_owned()
}

/// Booking page body. The embed block is the documented trusted-input
/// surface and is emitted verbatim.
pub fn booking_page(config: &Config) -> String {
    format!(
        "<div class=\"container\" style=\"padding:4rem 0; text-align:center; min-height:80vh;\">\
         <h1>{}</h1><p>{}</p>\
         <div style=\"margin-top:2rem; background:white; padding:1rem; border-radius:12px; box-shadow:0 10px 30px rgba(0,0,0,0.1);\">{}</div></div>",
        escape_html(&config.booking.title),
        escape_html(&config.booking.subtext),
        config.booking.embed
    )
}

/// Contact page body. The map embed is emitted verbatim (trusted input).
pub fn contact_page(config: &Config) -> String {
    let mut html = String::with_capacity(384);
    html.push_str("<div class=\"container\" style=\"padding:4rem 0; min-height:60vh;\"><h1>Contact Us</h1>");
    if !config.identity.phone.is_empty() {
        let _ = write!(
            html,
            "<p>Phone: <a href=\"tel:{0}\">{0}</a></p>",
            escape_html(&config.identity.phone)
        );
    }
    if !config.identity.email.is_empty() {
        let _ = write!(
            html,
            "<p>Email: <a href=\"mailto:{0}\">{0}</a></p>",
            escape_html(&config.identity.email)
        );
    }
    if !config.identity.address.is_empty() {
        let _ = write!(html, "<p>{}</p>", escape_html(&config.identity.address));
    }
    if !config.contact.map_embed.is_empty() {
        let _ = write!(
            html,
            "<div style=\"margin-top:2rem;\">{}</div>",
            config.contact.map_embed
        );
    }
    html.push_str("</div>");
    html
}

/// Legal page body (privacy or terms), in the constrained markup subset.
pub fn legal_page(title: &str, text: &str) -> String {
    format!(
        "<div class=\"container\" style=\"padding:4rem 0; min-height:60vh;\"><h1>{}</h1>{}</div>",
        escape_html(title),
        format_text(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use titan_config::Config;

    fn commerce_config() -> Config {
        let mut config = Config::default();
        config.inventory.feed_url = "https://sheets.example/pub?output=csv".to_owned();
        config.identity.phone = "966500000000".to_owned();
        config
    }

    #[test]
    fn test_nav_links_follow_toggles() {
        let mut config = commerce_config();
        config.sections.booking = true;
        let html = nav(&config);
        assert!(html.contains("booking.html"));
        assert!(html.contains("Book Now"));

        config.sections.booking = false;
        let html = nav(&config);
        assert!(!html.contains("booking.html"));
        assert!(!html.contains("Book Now"));
    }

    #[test]
    fn test_nav_falls_back_to_text_wordmark() {
        let mut config = commerce_config();
        config.identity.logo_url = String::new();
        let html = nav(&config);
        assert!(html.contains("My Business"));
        assert!(!html.contains("<img"));

        config.identity.logo_url = "https://cdn.example/logo.png".to_owned();
        let html = nav(&config);
        assert!(html.contains("<img src=\"https://cdn.example/logo.png\""));
    }

    #[test]
    fn test_nav_omits_call_button_without_phone() {
        let mut config = commerce_config();
        config.identity.phone = String::new();
        assert!(!nav(&config).contains("tel:"));
    }

    #[test]
    fn test_hero_escapes_user_text() {
        let mut config = commerce_config();
        config.hero.headline = "Fast & <Furious>".to_owned();
        let html = hero(&config);
        assert!(html.contains("Fast &amp; &lt;Furious&gt;"));
    }

    #[test]
    fn test_features_renders_parsed_cards() {
        let config = commerce_config();
        let html = features(&config);
        assert!(html.contains("Why Choose Us"));
        assert!(html.contains("<h3 style=\"font-size:1.2rem;\">Speed</h3>"));
        assert!(html.contains("Loads in 0.1s"));
    }

    #[test]
    fn test_empty_optional_sections_render_nothing() {
        let config = commerce_config();
        assert_eq!(stats(&config), "");
        assert_eq!(pricing(&config), "");
        assert_eq!(testimonials(&config), "");
        assert_eq!(faq(&config), "");
    }

    #[test]
    fn test_home_sections_gated_by_toggles() {
        let mut config = commerce_config();
        config.sections.features = false;
        let joined = home_sections(&config).join("");
        assert!(!joined.contains("Why Choose Us"));

        config.sections.features = true;
        let joined = home_sections(&config).join("");
        assert!(joined.contains("Why Choose Us"));
    }

    #[test]
    fn test_inventory_shell_omitted_without_feed() {
        let mut config = commerce_config();
        config.inventory.feed_url = String::new();
        let joined = home_sections(&config).join("");
        assert!(!joined.contains("id=\"inventory\""));
    }

    #[test]
    fn test_booking_embed_is_raw() {
        let mut config = commerce_config();
        config.booking.embed = "<iframe src=\"https://calendly.com/x\"></iframe>".to_owned();
        let html = booking_page(&config);
        assert!(html.contains("<iframe src=\"https://calendly.com/x\"></iframe>"));
    }

    #[test]
    fn test_footer_socials_omitted_when_empty() {
        let config = commerce_config();
        let html = footer(&config);
        assert!(!html.contains("Facebook"));

        let mut config = commerce_config();
        config.social.facebook = "https://facebook.com/acme".to_owned();
        let html = footer(&config);
        assert!(html.contains("Facebook"));
    }

    #[test]
    fn test_footer_legal_links_gated() {
        let mut config = commerce_config();
        config.sections.legal = true;
        let html = footer(&config);
        assert!(html.contains("privacy.html"));
        assert!(html.contains("terms.html"));
    }

    #[test]
    fn test_faq_renders_details_blocks() {
        let mut config = commerce_config();
        config.faq.items = "How fast? :: Very.\nbroken line".to_owned();
        let html = faq(&config);
        assert_eq!(html.matches("<details").count(), 1);
        assert!(html.contains("How fast?"));
    }

    #[test]
    fn test_about_page_uses_markup_subset() {
        let mut config = commerce_config();
        config.about.long = "**Our Story**\n* Fast\n* Cheap".to_owned();
        let html = about_page(&config);
        assert!(html.contains("<h3>Our Story</h3>"));
        assert!(html.contains("<ul><li>Fast</li><li>Cheap</li></ul>"));
    }
}
