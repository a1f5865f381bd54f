//! `titan init` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Starter configuration written by `titan init`.
const STARTER_CONFIG: &str = r##"# Titan site configuration.
# Run `titan build` in this directory to generate the site into dist/.

[identity]
name = "My Business"
# WhatsApp number with country code, digits only (e.g. "15551234567").
phone = ""
email = ""
# Optional logo image URL; the business name is used as a wordmark when empty.
logo_url = ""
tagline = "Quality you can trust."

[theme]
# One of: "Clean Corporate (Light)", "Midnight SaaS (Dark)",
# "Luxury Noir", "Eco Forest", "Ocean Breeze".
base = "Clean Corporate (Light)"
primary = "#0F172A"
accent = "#EF4444"

[hero]
headline = "Welcome"
subtext = "We are glad you are here."

[inventory]
# Published CSV feed with columns: Name, Price, Description, ImageURL, StripeLink.
feed_url = ""

[commerce]
currency = "$"
# upi_id = ""
# paypal_link = ""

[sections]
# booking = true
# blog = true
"##;

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Path for the new configuration file.
    #[arg(short, long, default_value = "titan.toml")]
    path: PathBuf,
}

impl InitArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.path.exists() {
            return Err(CliError::Validation(format!(
                "{} already exists; refusing to overwrite",
                self.path.display()
            )));
        }

        fs::write(&self.path, STARTER_CONFIG)?;
        output.success(&format!("Wrote {}", self.path.display()));
        output.info("Edit it and run `titan build` to generate the site.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use titan_config::Config;

    #[test]
    fn test_starter_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titan.toml");
        std::fs::write(&path, STARTER_CONFIG).unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.identity.name, "My Business");
        assert_eq!(config.theme.base, "Clean Corporate (Light)");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titan.toml");
        std::fs::write(&path, "[identity]\n").unwrap();

        let err = InitArgs { path }.execute().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
