// crates/perfcalc-cli/src/cmd/simulate.rs

use std::path::PathBuf;

use clap::{Args, Subcommand};
use perfcalc_core::simulate::{self, SimulationRequest};
use perfcalc_core::{Beatmap, Mods, Ruleset, SimulationTarget};

use crate::cmd::{play, OutputArgs};

#[derive(Args, Debug)]
pub struct SimulateCmd {
    #[command(subcommand)]
    pub ruleset: SimulateRuleset,
}

#[derive(Subcommand, Debug)]
pub enum SimulateRuleset {
    /// Simulate an osu! play
    Osu(SimulateArgs),
    /// Simulate an osu!taiko play
    Taiko(SimulateArgs),
    /// Simulate an osu!catch play
    Catch(SimulateArgs),
    /// Simulate an osu!mania play
    Mania(SimulateArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Path to the .osu file
    pub beatmap: PathBuf,

    /// Accuracy in percent
    #[arg(short = 'a', long, default_value_t = 100.0)]
    pub accuracy: f64,

    /// Max combo (defaults to --percent-combo of the beatmap max combo)
    #[arg(short = 'c', long)]
    pub combo: Option<u32>,

    /// Max combo as a percentage of the beatmap max combo
    #[arg(short = 'C', long, default_value_t = 100.0)]
    pub percent_combo: f64,

    /// Mod acronym, repeatable (e.g. -m HD -m DT)
    #[arg(short = 'm', long = "mod")]
    pub mods: Vec<String>,

    /// Number of misses
    #[arg(short = 'X', long, default_value_t = 0)]
    pub misses: u32,

    /// Number of mehs (tiny droplets in osu!catch)
    #[arg(short = 'M', long, visible_alias = "tiny-droplets")]
    pub mehs: Option<u32>,

    /// Number of goods (droplets in osu!catch)
    #[arg(short = 'G', long, visible_alias = "droplets")]
    pub goods: Option<u32>,

    /// Total score, shown for osu!mania
    #[arg(short = 's', long, default_value_t = 1_000_000)]
    pub score: u64,

    #[command(flatten)]
    pub out: OutputArgs,
}

impl SimulateRuleset {
    fn split(self) -> (Ruleset, SimulateArgs) {
        match self {
            Self::Osu(args) => (Ruleset::Osu, args),
            Self::Taiko(args) => (Ruleset::Taiko, args),
            Self::Catch(args) => (Ruleset::Catch, args),
            Self::Mania(args) => (Ruleset::Mania, args),
        }
    }
}

pub fn run(cmd: SimulateCmd) -> anyhow::Result<()> {
    let (ruleset, args) = cmd.ruleset.split();
    let mods = Mods::from_acronyms(ruleset, &args.mods)?;

    let request = SimulationRequest {
        target: SimulationTarget {
            accuracy: args.accuracy / 100.0,
            misses: args.misses,
            mehs: args.mehs,
            goods: args.goods,
        },
        combo: args.combo,
        percent_combo: args.percent_combo,
        total_score: args.score,
    };

    let beatmap = Beatmap::from_path(&args.beatmap)?;
    let result = simulate::simulate(&beatmap, ruleset, mods, &request)?;

    play::emit(&args.out.config(), &result)
}
