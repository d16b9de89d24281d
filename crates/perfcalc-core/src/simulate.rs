use crate::beatmap::{Beatmap, BeatmapInfo, BeatmapTotals};
use crate::calc::{self, PerformanceOutput};
use crate::error::Result;
use crate::mods::Mods;
use crate::ruleset::Ruleset;
use crate::score::{LegacyCounts, PlayInfo, ScoreInfo, SimulationTarget};
use crate::validate::{validate_catch_statistics, validate_percent, validate_statistics};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationRequest {
    pub target: SimulationTarget,
    pub combo: Option<u32>,
    /// Percentage of the beatmap's max combo, used when `combo` is `None`.
    pub percent_combo: f64,
    pub total_score: u64,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            target: SimulationTarget::default(),
            combo: None,
            percent_combo: 100.0,
            total_score: 1_000_000,
        }
    }
}

/// Literal legacy counts for one play; `combo` defaults to the beatmap max
/// combo.
///
/// Outside catch, `n100`/`n50` default to 0 and `n300` to whatever is left
/// once the other counts are taken. In catch each count is its own object
/// type: droplets and tiny droplets default to those not missed, fruits to
/// the fruits left after misses overflow the droplets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplicitPlay {
    pub combo: Option<u32>,
    pub n_geki: u32,
    pub n300: Option<u32>,
    pub n_katu: u32,
    pub n100: Option<u32>,
    pub n50: Option<u32>,
    pub misses: u32,
}

#[derive(Clone, Debug)]
pub struct PlayResult {
    pub beatmap: BeatmapInfo,
    pub ruleset: Ruleset,
    pub score: ScoreInfo,
    pub play_info: PlayInfo,
    pub performance: PerformanceOutput,
}

pub fn resolve_combo(combo: Option<u32>, percent_combo: f64, max_combo: u32) -> u32 {
    match combo {
        Some(combo) => combo.min(max_combo),
        None => (percent_combo / 100.0 * f64::from(max_combo)).round() as u32,
    }
}

/// Synthesize a play reaching `request` and score it.
pub fn simulate(
    beatmap: &Beatmap,
    ruleset: Ruleset,
    mods: Mods,
    request: &SimulationRequest,
) -> Result<PlayResult> {
    validate_percent("accuracy", request.target.accuracy * 100.0)?;
    validate_percent("percent combo", request.percent_combo)?;

    let difficulty = calc::compute_difficulty(beatmap, Some(ruleset), mods)?;
    let totals = difficulty.totals;

    let statistics = ruleset.synthesize_statistics(&totals, &request.target);
    let max_combo = resolve_combo(
        request.combo,
        request.percent_combo,
        ruleset.max_combo(&totals),
    );

    let score = ScoreInfo {
        accuracy: ruleset.accuracy(&statistics),
        max_combo,
        statistics,
        mods,
        total_score: request.total_score,
    };

    finish(beatmap, ruleset, score)
}

/// Score a play given literal hit counts.
pub fn score_explicit(
    beatmap: &Beatmap,
    ruleset: Ruleset,
    mods: Mods,
    play: &ExplicitPlay,
) -> Result<PlayResult> {
    let difficulty = calc::compute_difficulty(beatmap, Some(ruleset), mods)?;
    let totals = difficulty.totals;

    let counts = match ruleset {
        Ruleset::Catch => catch_counts(play, &totals),
        _ => judged_counts(ruleset, play, &totals),
    };

    let statistics = ruleset.from_legacy(&counts);
    match ruleset {
        Ruleset::Catch => validate_catch_statistics(&statistics, &totals)?,
        _ => validate_statistics(&statistics, &totals)?,
    }

    let score = ScoreInfo {
        accuracy: ruleset.accuracy(&statistics),
        max_combo: resolve_combo(play.combo, 100.0, ruleset.max_combo(&totals)),
        statistics,
        mods,
        total_score: 0,
    };

    finish(beatmap, ruleset, score)
}

fn judged_counts(ruleset: Ruleset, play: &ExplicitPlay, totals: &BeatmapTotals) -> LegacyCounts {
    let mut counts = LegacyCounts {
        n_geki: play.n_geki,
        n300: 0,
        n_katu: play.n_katu,
        n100: play.n100.unwrap_or(0),
        n50: play.n50.unwrap_or(0),
        misses: play.misses,
    };
    counts.n300 = match play.n300 {
        Some(n300) => n300,
        None => {
            let taken = ruleset.from_legacy(&counts).total();
            totals.objects.saturating_sub(taken)
        }
    };
    counts
}

// n300 fruits, n100 droplets, n50 tiny droplets, katu tiny droplet misses
fn catch_counts(play: &ExplicitPlay, totals: &BeatmapTotals) -> LegacyCounts {
    let n100 = play
        .n100
        .unwrap_or_else(|| totals.droplets.saturating_sub(play.misses));
    let fruit_misses = play
        .misses
        .saturating_sub(totals.droplets.saturating_sub(n100));
    let n300 = play
        .n300
        .unwrap_or_else(|| totals.fruits.saturating_sub(fruit_misses));
    let n50 = play
        .n50
        .unwrap_or_else(|| totals.tiny_droplets.saturating_sub(play.n_katu));

    LegacyCounts {
        n_geki: 0,
        n300,
        n_katu: play.n_katu,
        n100,
        n50,
        misses: play.misses,
    }
}

fn finish(beatmap: &Beatmap, ruleset: Ruleset, score: ScoreInfo) -> Result<PlayResult> {
    let performance = calc::compute_performance(beatmap, ruleset, &score)?;

    Ok(PlayResult {
        beatmap: beatmap.info.clone(),
        ruleset,
        play_info: ruleset.play_info(&score),
        score,
        performance,
    })
}
