//! PWA manifest generation.

use serde_json::json;
use titan_config::Config;

/// Build `manifest.json` for the installable app.
///
/// The icon entry is omitted when no icon URL is configured; everything
/// else always has a value (short name falls back to the truncated
/// business name).
#[must_use]
pub fn manifest(config: &Config) -> String {
    let mut manifest = json!({
        "name": config.identity.name,
        "short_name": config.pwa_short_name(),
        "start_url": "./index.html",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": config.theme.primary,
        "description": config.pwa.description,
        "icons": [],
    });

    if !config.pwa.icon.is_empty() {
        manifest["icons"] = json!([{
            "src": config.pwa.icon,
            "sizes": "512x512",
            "type": "image/png",
        }]);
    }

    manifest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use titan_config::Config;

    #[test]
    fn test_manifest_fields() {
        let mut config = Config::default();
        config.identity.name = "Acme Dental Studio".to_owned();
        config.pwa.icon = "https://cdn.example/icon.png".to_owned();

        let parsed: serde_json::Value = serde_json::from_str(&manifest(&config)).unwrap();
        assert_eq!(parsed["name"], "Acme Dental Studio");
        assert_eq!(parsed["short_name"], "Acme Dental ");
        assert_eq!(parsed["start_url"], "./index.html");
        assert_eq!(parsed["display"], "standalone");
        assert_eq!(parsed["theme_color"], "#0F172A");
        assert_eq!(parsed["icons"][0]["sizes"], "512x512");
        assert_eq!(parsed["icons"][0]["type"], "image/png");
    }

    #[test]
    fn test_manifest_without_icon() {
        let config = Config::default();
        let parsed: serde_json::Value = serde_json::from_str(&manifest(&config)).unwrap();
        assert_eq!(parsed["icons"].as_array().unwrap().len(), 0);
    }
}
