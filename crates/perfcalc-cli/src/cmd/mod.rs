// crates/perfcalc-cli/src/cmd/mod.rs

use clap::Args;
use std::path::PathBuf;

use crate::io::output::OutputConfig;

pub mod difficulty;
pub mod performance;
pub mod play;
pub mod profile;
pub mod simulate;

/// Output flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Also write the output to this file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn config(&self) -> OutputConfig {
        OutputConfig {
            json: self.json,
            output: self.output.clone(),
        }
    }
}
