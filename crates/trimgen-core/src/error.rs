use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    // Combinator input errors
    #[error("INVALID_CHAIN: {0}")]
    InvalidChain(String),

    #[error("INVALID_ACTIVE_BRANCH: branch {active} is outside a chain of {branches}")]
    InvalidActiveBranch { active: usize, branches: usize },

    #[error("INVALID_MATCH_SLOTS: expected {expected} slots, got {actual}")]
    InvalidMatchSlots { expected: usize, actual: usize },

    // Self-check errors
    #[error("SELF_CHECK_FAILED: {case}: {reason}")]
    SelfCheckFailed { case: String, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: failed to parse '{path}': {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    #[error("FMT_ERROR: {0}")]
    FmtError(#[from] std::fmt::Error),
}

impl GenError {
    pub(crate) fn self_check(case: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::SelfCheckFailed {
            case: case.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
