//! Command-line configuration

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Parser, Debug, Clone)]
#[command(name = "podcast-search")]
#[command(version)]
#[command(about = "Terminal client for a podcast search service", long_about = None)]
pub struct Config {
    /// Base URL of the search service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of results requested per search
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Directory for the rotating log files
    #[arg(long, default_value = ".logs")]
    pub log_dir: String,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
