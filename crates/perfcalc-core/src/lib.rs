pub mod error;
pub mod validate;

pub mod beatmap;
pub mod calc;
pub mod mods;
pub mod profile;
pub mod ruleset;
pub mod score;
pub mod simulate;

pub use crate::beatmap::{Beatmap, BeatmapInfo, BeatmapTotals};
pub use crate::error::{PerfError, Result};
pub use crate::mods::Mods;
pub use crate::ruleset::Ruleset;
pub use crate::score::{HitStatistics, LegacyCounts, ScoreInfo, SimulationTarget};
