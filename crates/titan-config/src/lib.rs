//! Configuration management for Titan.
//!
//! Parses `titan.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The loaded [`Config`] is the single source of truth for a generation
//! pass: every value a site owner can set lives here, grouped into
//! sections. After loading the value is treated as immutable; the only
//! sanctioned "mutation" is [`Config::merge_ai_copy`], which returns a
//! fresh value.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `inventory.feed_url`
//! - `blog.feed_url`
//! - `commerce.paypal_link`
//! - `commerce.upi_id`

mod expand;
mod merge;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use merge::AI_COPY_KEYS;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the business name.
    pub business_name: Option<String>,
    /// Override the business phone number.
    pub phone: Option<String>,
    /// Override the inventory feed URL.
    pub inventory_feed: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "titan.toml";

/// Full site configuration.
///
/// Every section is optional in the TOML file and falls back to defaults,
/// so an empty `titan.toml` is a valid (if bland) site.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Business identity (name, contact details, logo).
    pub identity: IdentityConfig,
    /// Visual theme selection.
    pub theme: ThemeConfig,
    /// Which optional sections and pages exist.
    pub sections: SectionToggles,
    /// Hero section content.
    pub hero: HeroConfig,
    /// Stats strip content.
    pub stats: StatsConfig,
    /// Feature grid content.
    pub features: FeaturesConfig,
    /// Pricing table content.
    pub pricing: PricingConfig,
    /// About section content.
    pub about: AboutConfig,
    /// Testimonials content.
    pub testimonials: TestimonialsConfig,
    /// FAQ content.
    pub faq: FaqConfig,
    /// Call-to-action banner content.
    pub cta: CtaConfig,
    /// Booking page content.
    pub booking: BookingConfig,
    /// Contact page content.
    pub contact: ContactConfig,
    /// Legal page text blocks.
    pub legal: LegalConfig,
    /// Cart and payment identifiers.
    pub commerce: CommerceConfig,
    /// Inventory feed settings.
    pub inventory: InventoryConfig,
    /// Blog feed settings.
    pub blog: BlogConfig,
    /// Social profile links.
    pub social: SocialConfig,
    /// PWA manifest settings.
    pub pwa: PwaConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Business identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Business name, used for the wordmark, titles and the manifest.
    pub name: String,
    /// Phone number, digits only (also the WhatsApp checkout target).
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Canonical site URL.
    pub url: String,
    /// Logo image URL. Empty falls back to a text wordmark.
    pub logo_url: String,
    /// Postal address shown in the footer.
    pub address: String,
    /// Short tagline.
    pub tagline: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "My Business".to_owned(),
            phone: String::new(),
            email: String::new(),
            url: String::new(),
            logo_url: String::new(),
            address: String::new(),
            tagline: String::new(),
        }
    }
}

/// Visual theme selection.
///
/// `base` is matched by substring against known palettes; unknown names
/// fall back to the light default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Base theme name, e.g. "Clean Corporate (Light)" or "Midnight SaaS (Dark)".
    pub base: String,
    /// Primary brand color (hex).
    pub primary: String,
    /// Accent / CTA color (hex).
    pub accent: String,
    /// Headings font family name.
    pub heading_font: String,
    /// Body font family name.
    pub body_font: String,
    /// Corner radius token, e.g. "8px".
    pub radius: String,
    /// Entry animation preset.
    pub animation: Animation,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            base: "Clean Corporate (Light)".to_owned(),
            primary: "#0F172A".to_owned(),
            accent: "#EF4444".to_owned(),
            heading_font: "Montserrat".to_owned(),
            body_font: "Inter".to_owned(),
            radius: "8px".to_owned(),
            animation: Animation::FadeUp,
        }
    }
}

/// Entry animation preset for cards and sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    /// Fade in while translating up.
    #[default]
    FadeUp,
    /// Scale in from slightly smaller.
    ZoomIn,
    /// Slide in from the left.
    SlideRight,
    /// No animation.
    None,
}

/// Which optional sections and pages are generated.
///
/// A disabled toggle removes both the section markup and any navigation
/// links pointing at it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub hero: bool,
    pub stats: bool,
    pub features: bool,
    pub pricing: bool,
    pub inventory: bool,
    pub booking: bool,
    pub blog: bool,
    pub about: bool,
    pub testimonials: bool,
    pub faq: bool,
    pub cta: bool,
    pub contact: bool,
    pub legal: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            hero: true,
            stats: false,
            features: true,
            pricing: false,
            inventory: true,
            booking: true,
            blog: false,
            about: true,
            testimonials: false,
            faq: true,
            cta: true,
            contact: false,
            legal: false,
        }
    }
}

/// Hero section content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Main headline.
    pub headline: String,
    /// Supporting subtext under the headline.
    pub subtext: String,
    /// First hero image URL.
    pub image_1: String,
    /// Second hero image URL.
    pub image_2: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Stop Paying Rent for Your Website.".to_owned(),
            subtext: "The Titan Engine is the world's first 0.1s website architecture. \
                      Pay once. Own it forever."
                .to_owned(),
            image_1: String::new(),
            image_2: String::new(),
        }
    }
}

/// Stats strip content.
///
/// `items` holds one `value | label` pair per line.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StatsConfig {
    pub items: String,
}

/// Feature grid content.
///
/// `items` holds one `icon | Title | Description` triple per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Section heading.
    pub title: String,
    /// Raw delimited feature lines.
    pub items: String,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            title: "Why Choose Us".to_owned(),
            items: "bolt | Speed | Loads in 0.1s\n\
                    wallet | Cost | $0 Monthly Fees\n\
                    shield | Secure | Unhackable Static Site"
                .to_owned(),
        }
    }
}

/// Pricing table content.
///
/// `plans` holds one `Name | Price | Description` triple per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub title: String,
    pub plans: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            title: "Pricing".to_owned(),
            plans: String::new(),
        }
    }
}

/// About section content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Section heading.
    pub title: String,
    /// Short summary shown on the home page.
    pub short: String,
    /// Long-form text for the about page, in the constrained markup subset.
    pub long: String,
    /// Side image URL.
    pub image: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            title: "Control Your Empire from a Spreadsheet".to_owned(),
            short: "No WordPress dashboard. No plugins to update. \
                    Just open your private Google Sheet."
                .to_owned(),
            long: String::new(),
            image: String::new(),
        }
    }
}

/// Testimonials content: one `Name | Quote` pair per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TestimonialsConfig {
    pub title: String,
    pub items: String,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            title: "What Our Customers Say".to_owned(),
            items: String::new(),
        }
    }
}

/// FAQ content: one `Question :: Answer` pair per line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    pub title: String,
    pub items: String,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            title: "Frequently Asked Questions".to_owned(),
            items: String::new(),
        }
    }
}

/// Call-to-action banner content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub headline: String,
    pub button_label: String,
    pub button_link: String,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            headline: "Ready to get started?".to_owned(),
            button_label: "Contact Us".to_owned(),
            button_link: String::new(),
        }
    }
}

/// Booking page content.
///
/// `embed` is a trusted-input surface: the site owner pastes third-party
/// scheduler markup (Calendly, Cal.com, ...) and it is emitted verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub title: String,
    pub subtext: String,
    pub embed: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            title: "Book an Appointment".to_owned(),
            subtext: "Select a time slot that works for you.".to_owned(),
            embed: String::new(),
        }
    }
}

/// Contact page content.
///
/// `map_embed` is a trusted-input surface like the booking embed: pasted
/// map markup is emitted verbatim.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContactConfig {
    pub map_embed: String,
}

/// Legal page text blocks, in the constrained markup subset.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LegalConfig {
    pub privacy: String,
    pub terms: String,
}

/// Cart and payment identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommerceConfig {
    /// Currency symbol shown next to prices.
    pub currency: String,
    /// PayPal.me link appended to checkout messages when set.
    pub paypal_link: String,
    /// UPI id appended to checkout messages when set.
    pub upi_id: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_owned(),
            paypal_link: String::new(),
            upi_id: String::new(),
        }
    }
}

/// Inventory feed settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct InventoryConfig {
    /// Published CSV URL (e.g. a Google Sheet export).
    pub feed_url: String,
    /// Image used when a feed row has no image column.
    pub fallback_image: String,
}

/// Blog feed settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BlogConfig {
    /// Published CSV URL with post rows.
    pub feed_url: String,
}

/// Social profile links. Empty links are omitted from the footer.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: String,
    pub instagram: String,
    pub x: String,
}

/// PWA manifest settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    /// App short name; empty defaults to the truncated business name.
    pub short_name: String,
    /// App description.
    pub description: String,
    /// 512x512 PNG icon URL.
    pub icon: String,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            short_name: String::new(),
            description: "Official App".to_owned(),
            icon: String::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`inventory.feed_url`").
        field: String,
        /// Error message (e.g., "${`SHEET_URL`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme, if set.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Ok(());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `titan.toml` in current directory and parents,
    /// and falls back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(name) = &settings.business_name {
            self.identity.name.clone_from(name);
        }
        if let Some(phone) = &settings.phone {
            self.identity.phone.clone_from(phone);
        }
        if let Some(feed) = &settings.inventory_feed {
            self.inventory.feed_url.clone_from(feed);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        expand::expand_url_fields(&mut config)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks field formats that later stages rely on. Called automatically
    /// after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "identity.name cannot be empty".into(),
            ));
        }
        // The checkout handoff URL requires a digits-only phone number.
        if !self.identity.phone.is_empty() && !self.identity.phone.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::Validation(
                "identity.phone must contain digits only (no '+', spaces or dashes)".into(),
            ));
        }
        require_http_url(&self.identity.url, "identity.url")?;
        require_http_url(&self.identity.logo_url, "identity.logo_url")?;
        require_http_url(&self.inventory.feed_url, "inventory.feed_url")?;
        require_http_url(&self.blog.feed_url, "blog.feed_url")?;
        require_http_url(&self.commerce.paypal_link, "commerce.paypal_link")?;
        require_http_url(&self.social.facebook, "social.facebook")?;
        require_http_url(&self.social.instagram, "social.instagram")?;
        require_http_url(&self.social.x, "social.x")?;
        require_http_url(&self.pwa.icon, "pwa.icon")?;
        Ok(())
    }

    /// PWA short name: configured value, or the business name truncated to
    /// 12 characters.
    #[must_use]
    pub fn pwa_short_name(&self) -> String {
        if self.pwa.short_name.is_empty() {
            self.identity.name.chars().take(12).collect()
        } else {
            self.pwa.short_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("titan.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "");
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.identity.name, "My Business");
        assert_eq!(config.commerce.currency, "$");
        assert!(config.sections.hero);
        assert!(!config.sections.blog);
        assert_eq!(config.theme.animation, Animation::FadeUp);
    }

    #[test]
    fn test_load_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[identity]
name = "Acme Dental"
phone = "966500000000"

[theme]
base = "Midnight SaaS (Dark)"
animation = "zoom-in"

[sections]
booking = false

[commerce]
currency = "SAR "
"#,
        );
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.identity.name, "Acme Dental");
        assert_eq!(config.theme.base, "Midnight SaaS (Dark)");
        assert_eq!(config.theme.animation, Animation::ZoomIn);
        assert!(!config.sections.booking);
        assert_eq!(config.commerce.currency, "SAR ");
    }

    #[test]
    fn test_missing_explicit_path_errors() {
        let result = Config::load(Some(Path::new("/nonexistent/titan.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_phone_must_be_digits_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[identity]\nname = \"A\"\nphone = \"+1 555-0100\"\n");
        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_feed_url_scheme_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[inventory]\nfeed_url = \"ftp://feed.example\"\n");
        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_discovery_walks_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        write_config(&dir, "[identity]\nname = \"Found Upward\"\n");
        let nested = dir.path().join("sub/deeper");
        std::fs::create_dir_all(&nested).unwrap();

        // Discovery reads the process working directory; restore it so
        // concurrent tests that touch the filesystem stay unaffected.
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let result = Config::load(None, None);
        std::env::set_current_dir(original).unwrap();

        assert_eq!(result.unwrap().identity.name, "Found Upward");
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[identity]\nname = \"From File\"\n");
        let settings = CliSettings {
            business_name: Some("From CLI".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.identity.name, "From CLI");
    }

    #[test]
    fn test_env_expansion_in_feed_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TITAN_TEST_SHEET", "https://sheets.example/pub");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[inventory]\nfeed_url = \"${TITAN_TEST_SHEET}\"\n");
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.inventory.feed_url, "https://sheets.example/pub");
        unsafe {
            std::env::remove_var("TITAN_TEST_SHEET");
        }
    }

    #[test]
    fn test_pwa_short_name_truncates() {
        let mut config = Config::default();
        config.identity.name = "A Very Long Business Name".to_owned();
        assert_eq!(config.pwa_short_name(), "A Very Long ");
        config.pwa.short_name = "Shorty".to_owned();
        assert_eq!(config.pwa_short_name(), "Shorty");
    }
}
