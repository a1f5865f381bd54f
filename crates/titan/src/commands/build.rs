//! `titan build` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use titan_config::{CliSettings, Config};
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover titan.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated site.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// JSON file with generated marketing copy to merge into the config.
    #[arg(long)]
    ai_copy: Option<PathBuf>,

    /// Business name (overrides config).
    #[arg(long)]
    name: Option<String>,

    /// WhatsApp number with country code, digits only (overrides config).
    #[arg(long)]
    phone: Option<String>,

    /// Published CSV product feed URL (overrides config).
    #[arg(long)]
    feed_url: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            business_name: self.name.clone(),
            phone: self.phone.clone(),
            inventory_feed: self.feed_url.clone(),
        };
        let mut config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        info!(path = ?config.config_path, "configuration loaded");

        if let Some(path) = &self.ai_copy {
            let raw = fs::read_to_string(path)?;
            let copy: serde_json::Value = serde_json::from_str(&raw)?;
            config = config.merge_ai_copy(&copy);
            output.info(&format!("Merged copy from {}", path.display()));
        }

        let bundle = titan_site::assemble(&config);

        fs::create_dir_all(&self.output_dir)?;
        for file in bundle.files() {
            debug!(name = %file.name, bytes = file.content.len(), "writing file");
            fs::write(self.output_dir.join(&file.name), &file.content)?;
        }
        info!(
            files = bundle.files().len(),
            output = %self.output_dir.display(),
            "site written"
        );

        output.highlight(&config.identity.name);
        for file in bundle.files() {
            output.info(&format!("  {} ({} bytes)", file.name, file.content.len()));
        }
        output.success(&format!(
            "Site built successfully to {}",
            self.output_dir.display()
        ));
        if config.identity.phone.is_empty() {
            output.warning("No WhatsApp number configured; cart checkout is disabled.");
        }
        Ok(())
    }
}
