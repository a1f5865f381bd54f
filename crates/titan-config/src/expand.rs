//! `${VAR}` expansion for deploy-specific configuration values.
//!
//! Feed URLs and payment identifiers are the values owners tend to keep
//! out of a committed `titan.toml`, so exactly those fields accept
//! `${VAR}` and `${VAR:-default}` references. Bare `$VAR` stays literal,
//! and a reference to an unset variable without a default is an error
//! naming the offending field.

use crate::{Config, ConfigError};

/// Marker for an unset variable inside the shellexpand context.
struct Unset;

/// Expand variable references in the URL-ish fields of a freshly parsed
/// configuration, in place. Runs before validation so an expanded feed
/// URL still gets its scheme checked.
pub(crate) fn expand_url_fields(config: &mut Config) -> Result<(), ConfigError> {
    let fields = [
        (&mut config.inventory.feed_url, "inventory.feed_url"),
        (&mut config.blog.feed_url, "blog.feed_url"),
        (&mut config.commerce.paypal_link, "commerce.paypal_link"),
        (&mut config.commerce.upi_id, "commerce.upi_id"),
    ];
    for (value, field) in fields {
        // Only braced references expand; plain values pass through.
        if !value.contains("${") {
            continue;
        }
        let expanded = shellexpand::env_with_context(value.as_str(), lookup)
            .map_err(|err| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", err.var_name),
            })?
            .into_owned();
        *value = expanded;
    }
    Ok(())
}

fn lookup(name: &str) -> Result<Option<String>, Unset> {
    std::env::var(name).map(Some).map_err(|_| Unset)
}
