//! Constants shared by the generators and the driver

/// Branch-chain settings
pub mod cond {
    /// The amount of branches to generate
    pub const BRANCHES: usize = 2;

    /// Upper bound accepted from a config file.
    /// 5 branches already yields 5 * 2^12 assertion lines per profile.
    pub const MAX_BRANCHES: usize = 5;

    /// Config file that flips the renderer's default to "always trim"
    pub const INVERTED_CONFIG: &str = "test_trim.toml";
}

/// Generated artifact names
pub mod output {
    /// Default directory, relative to the repository root
    pub const DEFAULT_DIR: &str = "testing/tests";

    /// Branch and match trimming cases
    pub const WS_FILE: &str = "ws.rs";

    /// Loop-with-fallback trimming cases
    pub const LOOP_ELSE_FILE: &str = "loop_else.rs";
}
