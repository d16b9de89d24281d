//! Per-ruleset behaviour behind one closed enum: max combo, statistics
//! synthesis, accuracy, legacy count mapping and play-info rendering.

use std::fmt;

use rosu_pp::model::mode::GameMode;
use serde::Serialize;

use crate::beatmap::BeatmapTotals;
use crate::error::{PerfError, Result};
use crate::score::{HitStatistics, LegacyCounts, PlayInfo, ScoreInfo, SimulationTarget};

mod catch;
mod mania;
mod osu;
mod taiko;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    Osu,
    Taiko,
    Catch,
    Mania,
}

impl Ruleset {
    pub const ALL: [Ruleset; 4] = [Self::Osu, Self::Taiko, Self::Catch, Self::Mania];

    /// Legacy ruleset id as used by the osu! API: 0 osu!, 1 taiko, 2 catch, 3 mania.
    pub fn from_id(id: i64) -> Result<Self> {
        match id {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            other => Err(PerfError::InvalidRuleset(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Osu => 0,
            Self::Taiko => 1,
            Self::Catch => 2,
            Self::Mania => 3,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "catch",
            Self::Mania => "mania",
        }
    }

    pub(crate) fn game_mode(self) -> GameMode {
        match self {
            Self::Osu => GameMode::Osu,
            Self::Taiko => GameMode::Taiko,
            Self::Catch => GameMode::Catch,
            Self::Mania => GameMode::Mania,
        }
    }

    pub(crate) fn from_game_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Osu => Self::Osu,
            GameMode::Taiko => Self::Taiko,
            GameMode::Catch => Self::Catch,
            GameMode::Mania => Self::Mania,
        }
    }

    /// Highest combo reachable on the beatmap.
    pub fn max_combo(self, totals: &BeatmapTotals) -> u32 {
        match self {
            Self::Catch => totals.fruits + totals.droplets,
            _ => totals.max_combo,
        }
    }

    /// Fill in the judgments the caller left out so that the resulting
    /// accuracy lands as close to `target.accuracy` as the beatmap allows.
    pub fn synthesize_statistics(
        self,
        totals: &BeatmapTotals,
        target: &SimulationTarget,
    ) -> HitStatistics {
        match self {
            Self::Osu => osu::synthesize(totals, target),
            Self::Taiko => taiko::synthesize(totals, target),
            Self::Catch => catch::synthesize(totals, target),
            Self::Mania => mania::synthesize(totals, target),
        }
    }

    /// Accuracy as a fraction in `0.0..=1.0`.
    pub fn accuracy(self, stats: &HitStatistics) -> f64 {
        match self {
            Self::Osu => osu::accuracy(stats),
            Self::Taiko => taiko::accuracy(stats),
            Self::Catch => catch::accuracy(stats),
            Self::Mania => mania::accuracy(stats),
        }
    }

    pub fn to_legacy(self, stats: &HitStatistics) -> LegacyCounts {
        match self {
            Self::Osu | Self::Taiko => LegacyCounts {
                n300: stats.great,
                n100: stats.good,
                n50: stats.meh,
                misses: stats.miss,
                ..Default::default()
            },
            Self::Catch | Self::Mania => LegacyCounts {
                n_geki: stats.perfect,
                n300: stats.great,
                n_katu: stats.good,
                n100: stats.ok,
                n50: stats.meh,
                misses: stats.miss,
            },
        }
    }

    /// osu! and taiko gekis/katus are combo-end markers layered over 300s and
    /// 100s, so they carry no judgment of their own.
    pub fn from_legacy(self, counts: &LegacyCounts) -> HitStatistics {
        match self {
            Self::Osu | Self::Taiko => HitStatistics {
                great: counts.n300,
                good: counts.n100,
                meh: counts.n50,
                miss: counts.misses,
                ..Default::default()
            },
            Self::Catch | Self::Mania => HitStatistics {
                perfect: counts.n_geki,
                great: counts.n300,
                good: counts.n_katu,
                ok: counts.n100,
                meh: counts.n50,
                miss: counts.misses,
            },
        }
    }

    /// Ruleset-specific description of a play, shared by text and JSON output.
    pub fn play_info(self, score: &ScoreInfo) -> PlayInfo {
        match self {
            Self::Osu => osu::play_info(score),
            Self::Taiko => taiko::play_info(score),
            Self::Catch => catch::play_info(score),
            Self::Mania => mania::play_info(score),
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Osu => "osu!",
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
        })
    }
}

/// `round(acc * total * weight)` as the integer score the judgments must reach.
fn target_total(accuracy: f64, total: u32, weight: u32) -> u32 {
    (accuracy.clamp(0.0, 1.0) * f64::from(total) * f64::from(weight)).round() as u32
}
