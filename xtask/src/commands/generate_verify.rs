use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use trimgen_core::{GeneratedFile, GeneratorConfig};
use xshell::Shell;

/// Seam between the freshness check and the generators, so tests can swap in
/// their own output.
pub trait GenerateEnv {
    fn sh(&self) -> &Shell;
    fn generate(&self) -> Result<Vec<GeneratedFile>>;
}

pub struct XshellEnv<'a> {
    pub sh: &'a Shell,
    pub config: &'a GeneratorConfig,
}

impl GenerateEnv for XshellEnv<'_> {
    fn sh(&self) -> &Shell {
        self.sh
    }

    fn generate(&self) -> Result<Vec<GeneratedFile>> {
        Ok(trimgen_core::all_files(self.config)?)
    }
}

pub struct VerifyOptions {
    pub out_dir: PathBuf, // Relative to the shell's current dir
}

pub fn run_verify(env: &impl GenerateEnv, opts: &VerifyOptions) -> Result<()> {
    let sh = env.sh();
    let out_dir = sh.current_dir().join(&opts.out_dir);

    info!("Checking generated fixtures in {:?}", opts.out_dir);

    // Generate in memory only; nothing on disk is touched
    let files = env.generate()?;

    let mut dirty_paths = Vec::new();
    for file in &files {
        let rel_path = opts.out_dir.join(file.name);
        let abs_path = out_dir.join(file.name);
        if !sh.path_exists(&abs_path) {
            dirty_paths.push(rel_path);
            continue;
        }

        let on_disk = sh
            .read_file(&abs_path)
            .with_context(|| format!("Failed to read {}", abs_path.display()))?;
        if on_disk != file.contents {
            dirty_paths.push(rel_path);
        }
    }

    if !dirty_paths.is_empty() {
        anyhow::bail!(
            "Outputs not fresh: generated fixtures in {:?} differ from disk.\n\
             Files changed: {:?}\n\
             Please run 'cargo xtask gen all' and commit the changes.",
            opts.out_dir,
            dirty_paths
        );
    }

    info!("Verify ok: {} generated files are fresh", files.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use trimgen_testkit::temp_dir_in_workspace;

    pub struct TestEnv<'a> {
        pub sh: &'a Shell,
        pub files: Vec<GeneratedFile>,
    }

    impl GenerateEnv for TestEnv<'_> {
        fn sh(&self) -> &Shell {
            self.sh
        }
        fn generate(&self) -> Result<Vec<GeneratedFile>> {
            Ok(self.files.clone())
        }
    }

    fn generated(name: &'static str, contents: &str) -> GeneratedFile {
        GeneratedFile {
            name,
            contents: contents.to_string(),
            cases: 1,
        }
    }

    #[test]
    fn test_verify_clean() {
        let temp = temp_dir_in_workspace();
        let sh = Shell::new().unwrap();
        let _dir = sh.push_dir(temp.path());

        fs::create_dir_all(temp.path().join("tests")).unwrap();
        fs::write(temp.path().join("tests/ws.rs"), "content").unwrap();

        let env = TestEnv {
            sh: &sh,
            files: vec![generated("ws.rs", "content")],
        };
        let opts = VerifyOptions {
            out_dir: PathBuf::from("tests"),
        };

        run_verify(&env, &opts).unwrap();
    }

    #[test]
    fn test_verify_fails_when_missing() {
        let temp = temp_dir_in_workspace();
        let sh = Shell::new().unwrap();
        let _dir = sh.push_dir(temp.path());

        let env = TestEnv {
            sh: &sh,
            files: vec![generated("loop_else.rs", "content")],
        };
        let opts = VerifyOptions {
            out_dir: PathBuf::from("."),
        };

        let res = run_verify(&env, &opts);
        let msg = res.unwrap_err().to_string();
        assert!(msg.contains("Outputs not fresh"));
        assert!(msg.contains("loop_else.rs"));
    }

    #[test]
    fn test_verify_fails_when_stale() {
        let temp = temp_dir_in_workspace();
        let sh = Shell::new().unwrap();
        let _dir = sh.push_dir(temp.path());

        fs::write(temp.path().join("ws.rs"), "old").unwrap();
        fs::write(temp.path().join("loop_else.rs"), "same").unwrap();

        let env = TestEnv {
            sh: &sh,
            files: vec![generated("ws.rs", "new"), generated("loop_else.rs", "same")],
        };
        let opts = VerifyOptions {
            out_dir: PathBuf::from("."),
        };

        let msg = run_verify(&env, &opts).unwrap_err().to_string();
        assert!(msg.contains("ws.rs"));
        assert!(!msg.contains("loop_else.rs"));
    }

    #[test]
    fn test_verify_real_generators() {
        let temp = temp_dir_in_workspace();
        let sh = Shell::new().unwrap();
        let _dir = sh.push_dir(temp.path());

        let config = GeneratorConfig::default();
        for file in trimgen_core::all_files(&config).unwrap() {
            fs::write(temp.path().join(file.name), &file.contents).unwrap();
        }

        let env = XshellEnv {
            sh: &sh,
            config: &config,
        };
        let opts = VerifyOptions {
            out_dir: PathBuf::from("."),
        };
        run_verify(&env, &opts).unwrap();
    }
}
