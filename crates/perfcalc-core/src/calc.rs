//! Boundary to the difficulty/performance calculator (`rosu-pp`).
//!
//! Nothing here implements difficulty or pp math; the calculator's results
//! are reshaped into [`DifficultySummary`] and [`PerformanceOutput`].

use rosu_pp::any::{DifficultyAttributes, PerformanceAttributes};
use rosu_pp::Performance;
use serde::Serialize;

use crate::beatmap::{Beatmap, BeatmapTotals};
use crate::error::{PerfError, Result};
use crate::mods::Mods;
use crate::ruleset::Ruleset;
use crate::score::{CategoryAttributes, ScoreInfo};

#[derive(Clone, Debug, Serialize)]
pub struct DifficultySummary {
    pub ruleset: Ruleset,
    pub stars: f64,
    pub max_combo: u32,
    #[serde(skip)]
    pub totals: BeatmapTotals,
    pub attributes: CategoryAttributes,
}

#[derive(Clone, Debug)]
pub struct PerformanceOutput {
    pub pp: f64,
    pub categories: CategoryAttributes,
}

/// Difficulty of `beatmap` in `ruleset` (its own ruleset when `None`).
pub fn compute_difficulty(
    beatmap: &Beatmap,
    ruleset: Option<Ruleset>,
    mods: Mods,
) -> Result<DifficultySummary> {
    let ruleset = ruleset.unwrap_or_else(|| beatmap.ruleset());

    let attrs = Performance::new(&beatmap.map)
        .mode_or_ignore(ruleset.game_mode())
        .mods(mods.bits())
        .calculate()
        .difficulty_attributes();

    ensure_ruleset(beatmap, ruleset, difficulty_ruleset(&attrs))?;

    Ok(DifficultySummary {
        ruleset,
        stars: attrs.stars(),
        max_combo: attrs.max_combo(),
        totals: totals(&attrs),
        attributes: difficulty_categories(&attrs),
    })
}

/// pp of `score` on `beatmap`, plus the calculator's category breakdown.
pub fn compute_performance(
    beatmap: &Beatmap,
    ruleset: Ruleset,
    score: &ScoreInfo,
) -> Result<PerformanceOutput> {
    let counts = ruleset.to_legacy(&score.statistics);

    let attrs = Performance::new(&beatmap.map)
        .mode_or_ignore(ruleset.game_mode())
        .mods(score.mods.bits())
        .combo(score.max_combo)
        .n_geki(counts.n_geki)
        .n300(counts.n300)
        .n_katu(counts.n_katu)
        .n100(counts.n100)
        .n50(counts.n50)
        .misses(counts.misses)
        .calculate();

    ensure_ruleset(beatmap, ruleset, performance_ruleset(&attrs))?;

    Ok(PerformanceOutput {
        pp: attrs.pp(),
        categories: performance_categories(&attrs),
    })
}

fn ensure_ruleset(beatmap: &Beatmap, wanted: Ruleset, got: Ruleset) -> Result<()> {
    if wanted == got {
        return Ok(());
    }

    Err(PerfError::Unconvertible {
        from: beatmap.ruleset(),
        to: wanted,
    })
}

fn difficulty_ruleset(attrs: &DifficultyAttributes) -> Ruleset {
    match attrs {
        DifficultyAttributes::Osu(_) => Ruleset::Osu,
        DifficultyAttributes::Taiko(_) => Ruleset::Taiko,
        DifficultyAttributes::Catch(_) => Ruleset::Catch,
        DifficultyAttributes::Mania(_) => Ruleset::Mania,
    }
}

fn performance_ruleset(attrs: &PerformanceAttributes) -> Ruleset {
    match attrs {
        PerformanceAttributes::Osu(_) => Ruleset::Osu,
        PerformanceAttributes::Taiko(_) => Ruleset::Taiko,
        PerformanceAttributes::Catch(_) => Ruleset::Catch,
        PerformanceAttributes::Mania(_) => Ruleset::Mania,
    }
}

fn totals(attrs: &DifficultyAttributes) -> BeatmapTotals {
    match attrs {
        DifficultyAttributes::Osu(a) => BeatmapTotals {
            max_combo: a.max_combo,
            objects: a.n_circles + a.n_sliders + a.n_spinners,
            ..Default::default()
        },
        DifficultyAttributes::Taiko(a) => BeatmapTotals {
            max_combo: a.max_combo,
            objects: a.max_combo,
            ..Default::default()
        },
        DifficultyAttributes::Catch(a) => BeatmapTotals {
            max_combo: a.max_combo(),
            objects: a.n_fruits + a.n_droplets + a.n_tiny_droplets,
            fruits: a.n_fruits,
            droplets: a.n_droplets,
            tiny_droplets: a.n_tiny_droplets,
        },
        DifficultyAttributes::Mania(a) => BeatmapTotals {
            max_combo: a.max_combo,
            objects: a.n_objects,
            ..Default::default()
        },
    }
}

fn difficulty_categories(attrs: &DifficultyAttributes) -> CategoryAttributes {
    let mut out = CategoryAttributes::default();

    match attrs {
        DifficultyAttributes::Osu(a) => {
            out.push("Aim", a.aim);
            out.push("Speed", a.speed);
            out.push("Flashlight", a.flashlight);
            out.push("Slider Factor", a.slider_factor);
            out.push("Speed Note Count", a.speed_note_count);
            out.push("Approach Rate", a.ar);
            out.push("HP", a.hp);
            out.push("Circles", f64::from(a.n_circles));
            out.push("Sliders", f64::from(a.n_sliders));
            out.push("Spinners", f64::from(a.n_spinners));
        }
        DifficultyAttributes::Taiko(a) => {
            out.push("Stamina", a.stamina);
            out.push("Rhythm", a.rhythm);
            out.push("Colour", a.color);
        }
        DifficultyAttributes::Catch(a) => {
            out.push("Approach Rate", a.ar);
            out.push("Fruits", f64::from(a.n_fruits));
            out.push("Droplets", f64::from(a.n_droplets));
            out.push("Tiny Droplets", f64::from(a.n_tiny_droplets));
        }
        DifficultyAttributes::Mania(a) => {
            out.push("Objects", f64::from(a.n_objects));
        }
    }

    out
}

fn performance_categories(attrs: &PerformanceAttributes) -> CategoryAttributes {
    let mut out = CategoryAttributes::default();

    match attrs {
        PerformanceAttributes::Osu(a) => {
            out.push("Aim", a.pp_aim);
            out.push("Speed", a.pp_speed);
            out.push("Accuracy", a.pp_acc);
            out.push("Flashlight", a.pp_flashlight);
            out.push("Effective Miss Count", a.effective_miss_count);
            out.push("Star Rating", a.difficulty.stars);
            out.push("Approach Rate", a.difficulty.ar);
            out.push("Max Combo", f64::from(a.difficulty.max_combo));
        }
        PerformanceAttributes::Taiko(a) => {
            out.push("Difficulty", a.pp_difficulty);
            out.push("Accuracy", a.pp_acc);
            out.push("Effective Miss Count", a.effective_miss_count);
            out.push("Star Rating", a.difficulty.stars);
            out.push("Max Combo", f64::from(a.difficulty.max_combo));
        }
        PerformanceAttributes::Catch(a) => {
            out.push("Star Rating", a.difficulty.stars);
            out.push("Approach Rate", a.difficulty.ar);
            out.push("Max Combo", f64::from(a.difficulty.max_combo()));
        }
        PerformanceAttributes::Mania(a) => {
            out.push("Difficulty", a.pp_difficulty);
            out.push("Star Rating", a.difficulty.stars);
            out.push("Max Combo", f64::from(a.difficulty.max_combo));
        }
    }

    out
}
