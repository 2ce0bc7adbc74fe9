mod cli;
mod commands;

use crate::cli::{Cli, Commands, GenCommands};
use crate::commands::generate::{GenerateAction, GenerateCommand};
use anyhow::{Context, Result};
use clap::Parser;
use trimgen_core::GeneratorConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen(args) => {
            let mut config = GeneratorConfig::load(args.config.as_deref()).with_context(|| {
                format!("Failed to load generator config {:?}", args.config)
            })?;
            if let Some(out_dir) = args.out_dir {
                config.output.dir = out_dir;
            }

            let action = match args.command {
                GenCommands::Ws => GenerateAction::Ws,
                GenCommands::LoopElse => GenerateAction::LoopElse,
                GenCommands::All => GenerateAction::All,
                GenCommands::Verify => GenerateAction::Verify,
            };
            let cmd = GenerateCommand::new(action, config);
            use crate::commands::Command as _;
            cmd.run()?;
        }
    }

    Ok(())
}
