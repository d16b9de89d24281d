// crates/perfcalc-cli/src/cmd/performance.rs

use std::path::PathBuf;

use clap::Args;
use perfcalc_core::simulate::{self, ExplicitPlay};
use perfcalc_core::{Beatmap, Mods, Ruleset};

use crate::cmd::{play, OutputArgs};

#[derive(Args, Debug)]
pub struct PerformanceArgs {
    /// Path to the .osu file
    pub beatmap: PathBuf,

    /// Ruleset id (0 osu!, 1 taiko, 2 catch, 3 mania); defaults to the beatmap's own
    #[arg(short = 'r', long, value_parser = clap::value_parser!(i64).range(0..=3))]
    pub ruleset: Option<i64>,

    /// Mod acronym, repeatable
    #[arg(short = 'm', long = "mod")]
    pub mods: Vec<String>,

    /// Max combo (defaults to the beatmap max combo)
    #[arg(long)]
    pub combo: Option<u32>,

    #[arg(long, default_value_t = 0)]
    pub gekis: u32,

    /// Defaults to the judged objects left after the other counts (fruits in osu!catch)
    #[arg(long)]
    pub n300: Option<u32>,

    #[arg(long, default_value_t = 0)]
    pub katus: u32,

    /// Defaults to 0, or to the droplets not missed in osu!catch
    #[arg(long)]
    pub n100: Option<u32>,

    /// Defaults to 0, or to the tiny droplets not missed in osu!catch
    #[arg(long)]
    pub n50: Option<u32>,

    #[arg(long, default_value_t = 0)]
    pub misses: u32,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run(args: PerformanceArgs) -> anyhow::Result<()> {
    let beatmap = Beatmap::from_path(&args.beatmap)?;
    let ruleset = match args.ruleset {
        Some(id) => Ruleset::from_id(id)?,
        None => beatmap.ruleset(),
    };
    let mods = Mods::from_acronyms(ruleset, &args.mods)?;

    let counts = ExplicitPlay {
        combo: args.combo,
        n_geki: args.gekis,
        n300: args.n300,
        n_katu: args.katus,
        n100: args.n100,
        n50: args.n50,
        misses: args.misses,
    };

    let result = simulate::score_explicit(&beatmap, ruleset, mods, &counts)?;
    play::emit(&args.out.config(), &result)
}
