#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use escargot::CargoBuild;
    use predicates::prelude::*;
    use std::sync::LazyLock;

    static XTASK: LazyLock<escargot::CargoRun> = LazyLock::new(|| {
        CargoBuild::new()
            .bin("xtask")
            .run()
            .expect("failed to build xtask")
    });

    #[test]
    fn test_help() {
        let output = XTASK.command().arg("--help").output().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Whitespace-trim fixture generation"));
    }

    #[test]
    fn test_gen_help() {
        let output = XTASK.command().arg("gen").arg("--help").output().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Generate if/else and match trim cases"));
        assert!(stdout.contains("Generate for/else trim cases"));
        assert!(stdout.contains("Generate every fixture file"));
        assert!(stdout.contains("Check that generated fixture files are up to date"));
    }

    #[test]
    fn test_gen_all_then_verify() {
        let temp = assert_fs::TempDir::new().unwrap();

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "all", "--out-dir", "out"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");

        temp.child("out/ws.rs")
            .assert(predicate::str::contains(
                "// This file is auto generated by `cargo xtask gen ws`",
            ))
            .assert(predicate::str::contains("fn test_cond_ws_inverted() {"))
            .assert(predicate::str::contains("fn test_match_ws() {"));
        temp.child("out/loop_else.rs")
            .assert(predicate::str::contains("fn test_loop_else_trim63() {"));

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "verify", "--out-dir", "out"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");
    }

    #[test]
    fn test_verify_detects_edits() {
        let temp = assert_fs::TempDir::new().unwrap();

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "ws", "--out-dir", "."])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");
        temp.child("loop_else.rs").assert(predicate::path::missing());

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "verify", "--out-dir", "."])
            .output()
            .unwrap();
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Outputs not fresh"));
        assert!(stderr.contains("loop_else.rs"));
    }

    #[test]
    fn test_config_limits_branches() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("xtask.toml")
            .write_str("[cond]\nbranches = 1\n\n[output]\ndir = \"generated\"\n")
            .unwrap();

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "ws", "--config", "xtask.toml"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");

        let ws = temp.child("generated/ws.rs");
        ws.assert(predicate::str::contains("endif"));
        let contents = std::fs::read_to_string(ws.path()).unwrap();
        assert!(!contents.contains("else"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("xtask.toml")
            .write_str("[cond]\nbranches = 0\n")
            .unwrap();

        let output = XTASK
            .command()
            .current_dir(temp.path())
            .args(["gen", "all", "--config", "xtask.toml"])
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("CONFIG_INVALID_VALUE"));
    }

    #[test]
    fn test_debug_logging_reports_case_counts() {
        let temp = assert_fs::TempDir::new().unwrap();

        let output = temp_env::with_var("RUST_LOG", Some("debug"), || {
            XTASK
                .command()
                .current_dir(temp.path())
                .args(["gen", "loop-else", "--out-dir", "."])
                .output()
                .unwrap()
        });

        assert!(output.status.success(), "{output:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("loop_else.rs: 64 cases"), "{stderr}");
    }
}
