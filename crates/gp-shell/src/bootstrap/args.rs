use std::path::PathBuf;

use clap::Parser;

/// Browse the artwork catalog and build a selection across pages.
#[derive(Debug, Clone, Parser)]
#[command(name = "gallery-picker", version, about)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page to open first (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page; overrides the configuration file
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,
}
