use std::path::PathBuf;

use clap::Parser;

/// Chorus: ask several AI chat sites the same question, side by side.
#[derive(Parser, Debug)]
#[command(name = "chorus", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Provider URLs to open instead of the configured startup list.
    pub urls: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
