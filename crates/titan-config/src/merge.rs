//! Merging AI-generated copy into a configuration.
//!
//! The AI copy provider is an external collaborator: something else calls
//! it and hands us its JSON response. The contract here is purely "apply
//! recognized text fields", returning a new [`Config`] and never touching
//! the input value. Unrecognized keys are ignored, missing keys leave the
//! prior values intact, and non-string values are rejected per key.

use serde_json::Value;
use tracing::debug;

use crate::Config;

/// JSON keys recognized by [`Config::merge_ai_copy`].
pub const AI_COPY_KEYS: [&str; 5] = ["hero_h", "hero_sub", "about_h", "about_short", "feat_data"];

impl Config {
    /// Merge recognized AI-copy fields into a new configuration.
    ///
    /// Recognized keys and their targets:
    ///
    /// | key           | field             |
    /// |---------------|-------------------|
    /// | `hero_h`      | `hero.headline`   |
    /// | `hero_sub`    | `hero.subtext`    |
    /// | `about_h`     | `about.title`     |
    /// | `about_short` | `about.short`     |
    /// | `feat_data`   | `features.items`  |
    ///
    /// `feat_data` is expected to be a multi-line `icon | Title | Desc`
    /// block, the same shape the feature parser consumes.
    #[must_use]
    pub fn merge_ai_copy(&self, response: &Value) -> Self {
        let mut merged = self.clone();

        let Some(object) = response.as_object() else {
            debug!("AI copy response is not a JSON object, ignoring");
            return merged;
        };

        if let Some(text) = string_field(object, "hero_h") {
            merged.hero.headline = text;
        }
        if let Some(text) = string_field(object, "hero_sub") {
            merged.hero.subtext = text;
        }
        if let Some(text) = string_field(object, "about_h") {
            merged.about.title = text;
        }
        if let Some(text) = string_field(object, "about_short") {
            merged.about.short = text;
        }
        if let Some(text) = string_field(object, "feat_data") {
            merged.features.items = text;
        }

        merged
    }
}

/// Fetch a string field from the response object.
///
/// Non-string values are skipped with a debug log rather than erroring,
/// so a partially malformed response still contributes its usable keys.
fn string_field(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            debug!(key, value_type = %json_type(other), "ignoring non-string AI copy value");
            None
        }
        None => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
