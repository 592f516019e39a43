use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(author, version, about)]
pub struct Arguments {
    /// Specify path for config file (.toml or .json).
    #[clap(short, long, default_value = "./config.toml")]
    pub config: PathBuf,
}
