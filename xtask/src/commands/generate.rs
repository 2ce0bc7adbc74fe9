use crate::commands::generate_verify::{GenerateEnv, VerifyOptions, XshellEnv, run_verify};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write as _;
use std::path::Path;
use trimgen_core::{GeneratedFile, GeneratorConfig};
use xshell::Shell;

pub enum GenerateAction {
    Ws,
    LoopElse,
    All,
    Verify,
}

pub struct GenerateCommand {
    pub action: GenerateAction,
    pub config: GeneratorConfig,
}

impl crate::commands::Command for GenerateCommand {
    fn run(&self) -> Result<()> {
        let sh = Shell::new()?;
        let env = XshellEnv {
            sh: &sh,
            config: &self.config,
        };

        match self.action {
            GenerateAction::Ws => self.write(&sh, vec![trimgen_core::ws_file(&self.config)?]),
            GenerateAction::LoopElse => self.write(&sh, vec![trimgen_core::loop_else_file()?]),
            GenerateAction::All => self.write(&sh, env.generate()?),
            GenerateAction::Verify => {
                let opts = VerifyOptions {
                    out_dir: self.config.output.dir.clone(),
                };
                run_verify(&env, &opts)
            }
        }
    }
}

impl GenerateCommand {
    pub fn new(action: GenerateAction, config: GeneratorConfig) -> Self {
        Self { action, config }
    }

    fn write(&self, sh: &Shell, files: Vec<GeneratedFile>) -> Result<()> {
        let out_dir = sh.current_dir().join(&self.config.output.dir);
        sh.create_dir(&out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        for file in files {
            let path = out_dir.join(file.name);
            debug!(
                "{}: {} cases, {} bytes",
                file.name,
                file.cases,
                file.contents.len()
            );

            // Compare bytes, so a non-UTF-8 leftover is replaced instead of rejected
            if sh.path_exists(&path)
                && sh.read_binary_file(&path)? == file.contents.as_bytes()
            {
                info!("{} is up to date", path.display());
                continue;
            }

            write_atomic(&out_dir, &path, &file.contents)?;
            info!("Wrote {} ({} cases)", path.display(), file.cases);
        }
        Ok(())
    }
}

/// Writes through a temp file in the same directory so a failed run never
/// leaves a half-written fixture behind.
fn write_atomic(dir: &Path, path: &Path, contents: &str) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
