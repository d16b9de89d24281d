use std::path::PathBuf;

use thiserror::Error;

use crate::ruleset::Ruleset;

pub type Result<T> = std::result::Result<T, PerfError>;

#[derive(Debug, Error)]
pub enum PerfError {
    #[error("invalid mod provided: {0}")]
    InvalidMod(String),

    #[error("mod {acronym} is not available in {ruleset}")]
    ModNotInRuleset { acronym: String, ruleset: Ruleset },

    #[error("invalid ruleset id: {0} (expected 0-3)")]
    InvalidRuleset(i64),

    #[error("failed to read beatmap {}", .path.display())]
    Beatmap {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("beatmap cannot be converted from {from} to {to}")]
    Unconvertible { from: Ruleset, to: Ruleset },

    #[error("validation error: {0}")]
    Validation(String),
}
