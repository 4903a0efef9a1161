use crate::application::session::DEFAULT_MAX_READ_FAILURES;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The interactive console front panel.
    #[default]
    Text,
    /// One JSON object per outcome event.
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "A vegan chocolate vending machine", long_about = None)]
pub struct Settings {
    /// Read input lines from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// How to render the machine's output
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Consecutive failed reads tolerated before giving up
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_READ_FAILURES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_read_failures: u32,
}

impl Settings {
    /// `RUST_LOG` wins over `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
