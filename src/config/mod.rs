pub mod toml_config;

pub use toml_config::{LoaderSettings, LoggingConfig, TomlConfig};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::{LoaderSettings, TomlConfig};
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "bookmarks-ui")]
    #[command(about = "Partial loader and page helpers for the bookmarks web app")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Server root, e.g. http://localhost:8080")]
        pub base_url: Option<String>,

        #[arg(long, global = true, help = "TOML configuration file")]
        pub config: Option<PathBuf>,

        #[arg(long, global = true)]
        pub spinner_delay_ms: Option<u64>,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Log as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Load one partial into in-memory views and print their final content
        Partial {
            endpoint: String,

            #[arg(long, default_value = "partial")]
            target: String,

            #[arg(long, default_value = "1")]
            views: usize,
        },

        /// Print the bookmarklet script for an API key
        Bookmarklet {
            #[arg(long)]
            key: Option<String>,

            /// Page origin the bookmarklet posts to; defaults to the base URL
            #[arg(long)]
            origin: Option<String>,
        },

        /// Print the tag list markup for the given names
        Tags {
            #[arg(long, help = "Render as search tags")]
            search: bool,

            names: Vec<String>,
        },
    }

    impl CliConfig {
        pub fn file_config(&self) -> Result<TomlConfig> {
            match &self.config {
                Some(path) => TomlConfig::from_file(path),
                None => Ok(TomlConfig::default()),
            }
        }

        /// Loader settings: defaults, then the config file, then flags.
        pub fn settings(&self, file: &TomlConfig) -> Result<LoaderSettings> {
            let mut settings = file.loader.clone();
            if let Some(base_url) = &self.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(delay) = self.spinner_delay_ms {
                settings.spinner_delay_ms = delay;
            }
            settings.validate()?;
            Ok(settings)
        }
    }

}
