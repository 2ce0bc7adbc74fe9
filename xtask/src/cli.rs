use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Trimgen automation tasks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Whitespace-trim fixture generation
    #[command(name = "gen")]
    Gen(GenArgs),
}

#[derive(Parser)]
pub struct GenArgs {
    /// Output directory for generated files (overrides output.dir from the config)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Generator config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: GenCommands,
}

#[derive(Subcommand)]
pub enum GenCommands {
    /// Generate if/else and match trim cases
    Ws,
    /// Generate for/else trim cases
    LoopElse,
    /// Generate every fixture file
    All,
    /// Check that generated fixture files are up to date
    Verify,
}
