use super::toml_config::TomlConfig;
use super::{Overrides, Settings};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "post2md")]
#[command(about = "Fetch a blog post and print it as markdown")]
#[command(version)]
pub struct CliConfig {
    /// Post URL (overrides source.url from the config file)
    pub url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write markdown to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// CSS selector for the post body; repeat to try several in order
    #[arg(long = "selector")]
    pub selectors: Vec<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn into_settings(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let overrides = Overrides {
            url: self.url,
            user_agent: self.user_agent,
            timeout_seconds: self.timeout_secs,
            selectors: self.selectors,
            output_path: self.output,
        };

        Settings::resolve(file, overrides)
    }
}
