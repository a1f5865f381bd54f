//! Theme resolution: configuration choices into an immutable token set.

use titan_config::{Animation, ThemeConfig};

/// Resolved visual constants consumed by every renderer.
///
/// Computed once per generation pass from the configuration and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub card: String,
    pub heading_font: String,
    pub body_font: String,
    pub radius: String,
    pub animation_css: String,
}

/// Base palette: (background, text, card).
type Palette = (&'static str, &'static str, &'static str);

const PALETTE_LIGHT: Palette = ("#ffffff", "#0f172a", "#ffffff");
const PALETTE_MIDNIGHT: Palette = ("#0f172a", "#f8fafc", "#1e293b");
const PALETTE_LUXURY: Palette = ("#1c1c1c", "#D4AF37", "#2a2a2a");
const PALETTE_ECO: Palette = ("#f0fdf4", "#14532d", "#ffffff");
const PALETTE_OCEAN: Palette = ("#f0f9ff", "#0c4a6e", "#ffffff");

/// Resolve the theme configuration into tokens.
///
/// The base palette is chosen by substring match on the theme name; any
/// unrecognized name falls through to the light default. Colors and fonts
/// pass through verbatim.
#[must_use]
pub fn resolve_theme(theme: &ThemeConfig) -> ThemeTokens {
    let (background, text, card) = if theme.base.contains("Midnight") {
        PALETTE_MIDNIGHT
    } else if theme.base.contains("Luxury") {
        PALETTE_LUXURY
    } else if theme.base.contains("Eco") || theme.base.contains("Forest") {
        PALETTE_ECO
    } else if theme.base.contains("Ocean") {
        PALETTE_OCEAN
    } else {
        PALETTE_LIGHT
    };

    ThemeTokens {
        primary: theme.primary.clone(),
        accent: theme.accent.clone(),
        background: background.to_owned(),
        text: text.to_owned(),
        card: card.to_owned(),
        heading_font: theme.heading_font.clone(),
        body_font: theme.body_font.clone(),
        radius: theme.radius.clone(),
        animation_css: animation_preset(theme.animation).to_owned(),
    }
}

/// CSS snippet for the selected entry animation.
fn animation_preset(animation: Animation) -> &'static str {
    match animation {
        Animation::FadeUp => {
            "@keyframes enter { from { opacity: 0; transform: translateY(24px); } \
             to { opacity: 1; transform: none; } } \
             .card, section, header { animation: enter 0.6s ease both; }"
        }
        Animation::ZoomIn => {
            "@keyframes enter { from { opacity: 0; transform: scale(0.95); } \
             to { opacity: 1; transform: none; } } \
             .card, section, header { animation: enter 0.5s ease both; }"
        }
        Animation::SlideRight => {
            "@keyframes enter { from { opacity: 0; transform: translateX(-24px); } \
             to { opacity: 1; transform: none; } } \
             .card, section, header { animation: enter 0.5s ease both; }"
        }
        Animation::None => "",
    }
}

/// Build the shared page stylesheet from resolved tokens.
#[must_use]
pub fn theme_css(tokens: &ThemeTokens) -> String {
    format!(
        r#":root {{ --p: {primary}; --s: {accent}; --bg: {background}; --txt: {text}; --card: {card}; --r: {radius}; --font-h: '{heading_font}'; --font-b: '{body_font}'; }}
body {{ background: var(--bg); color: var(--txt); font-family: var(--font-b), sans-serif; margin: 0; padding-bottom: 80px; }}
h1, h2, h3 {{ font-family: var(--font-h), sans-serif; color: var(--p); }}
.container {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; }}
.btn {{ background: var(--p); color: white; padding: 12px 24px; text-decoration: none; border-radius: var(--r); display: inline-block; font-weight: bold; border: none; cursor: pointer; }}
.btn-accent {{ background: var(--s); }}
.card {{ background: var(--card); padding: 20px; border-radius: 12px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border: 1px solid rgba(128,128,128,0.1); }}
.grid-3 {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }}
#cart-float {{ position: fixed; bottom: 20px; left: 20px; background: var(--p); color: white; padding: 15px 20px; border-radius: 50px; box-shadow: 0 10px 20px rgba(0,0,0,0.2); cursor: pointer; z-index: 999; display: flex; align-items: center; gap: 10px; font-weight: bold; }}
#cart-modal {{ display: none; position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); background: var(--card); width: 90%; max-width: 500px; padding: 2rem; border-radius: 16px; box-shadow: 0 20px 50px rgba(0,0,0,0.3); z-index: 1000; border: 1px solid rgba(128,128,128,0.2); }}
#cart-overlay {{ display: none; position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: rgba(0,0,0,0.5); z-index: 999; }}
.cart-item {{ display: flex; justify-content: space-between; border-bottom: 1px solid #eee; padding: 10px 0; }}
nav {{ padding: 1rem 0; background: rgba(255,255,255,0.1); backdrop-filter: blur(10px); position: sticky; top: 0; z-index: 100; border-bottom: 1px solid rgba(128,128,128,0.1); }}
.nav-flex {{ display: flex; justify-content: space-between; align-items: center; }}
{animation_css}"#,
        primary = tokens.primary,
        accent = tokens.accent,
        background = tokens.background,
        text = tokens.text,
        card = tokens.card,
        radius = tokens.radius,
        heading_font = tokens.heading_font,
        body_font = tokens.body_font,
        animation_css = tokens.animation_css,
    )
}
