use crate::app::cards::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::config::CatalogConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "brewnit")]
#[command(about = "Browse the hop, fermentable and yeast catalog")]
pub struct CliConfig {
    /// Hop collection endpoint [default: http://localhost:4000/api/hops]
    #[arg(long)]
    pub hops_url: Option<String>,

    /// Fermentable collection endpoint [default: http://localhost:4000/api/fermentables]
    #[arg(long)]
    pub fermentables_url: Option<String>,

    /// Yeast collection endpoint [default: http://localhost:4000/api/yeasts]
    #[arg(long)]
    pub yeasts_url: Option<String>,

    /// TOML file with endpoint settings; explicit URL flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request deadline; no deadline when omitted
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut resolved = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.to_catalog_config(),
            None => CatalogConfig::default(),
        };

        if let Some(url) = &self.hops_url {
            resolved.hops_url = url.clone();
        }
        if let Some(url) = &self.fermentables_url {
            resolved.fermentables_url = url.clone();
        }
        if let Some(url) = &self.yeasts_url {
            resolved.yeasts_url = url.clone();
        }
        if self.timeout_seconds.is_some() {
            resolved.timeout_seconds = self.timeout_seconds;
        }

        Ok(resolved)
    }
}
