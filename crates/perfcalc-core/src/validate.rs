use crate::beatmap::BeatmapTotals;
use crate::error::{PerfError, Result};
use crate::score::HitStatistics;

pub fn validate_percent(name: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(PerfError::Validation(format!(
            "{name} must be within 0..=100, got {value}"
        )));
    }
    Ok(())
}

/// Explicit hit counts must not claim more judgments than the beatmap has.
pub fn validate_statistics(stats: &HitStatistics, totals: &BeatmapTotals) -> Result<()> {
    let total = stats.total();
    if total > totals.objects {
        return Err(PerfError::Validation(format!(
            "hit counts add up to {total} but the beatmap only has {} judged objects",
            totals.objects
        )));
    }
    Ok(())
}

/// Catch counts are bounded per object type, not only in total.
pub fn validate_catch_statistics(stats: &HitStatistics, totals: &BeatmapTotals) -> Result<()> {
    let bounds = [
        ("fruits", stats.great, totals.fruits),
        ("droplets", stats.ok, totals.droplets),
        ("tiny droplets", stats.meh + stats.good, totals.tiny_droplets),
        (
            "fruits, droplets and misses",
            stats.great + stats.ok + stats.miss,
            totals.fruits + totals.droplets,
        ),
    ];

    for (name, count, max) in bounds {
        if count > max {
            return Err(PerfError::Validation(format!(
                "{name} add up to {count} but the beatmap only has {max}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salad() -> BeatmapTotals {
        BeatmapTotals {
            max_combo: 13,
            objects: 16,
            fruits: 12,
            droplets: 1,
            tiny_droplets: 3,
        }
    }

    #[test]
    fn catch_fruits_cannot_absorb_droplets() {
        let stats = HitStatistics {
            great: 16,
            ..Default::default()
        };
        assert!(validate_catch_statistics(&stats, &salad()).is_err());
        // the same counts pass the total-only check
        assert!(validate_statistics(&stats, &salad()).is_ok());
    }

    #[test]
    fn full_catch_play_is_valid() {
        let stats = HitStatistics {
            great: 12,
            ok: 1,
            meh: 2,
            good: 1,
            ..Default::default()
        };
        assert!(validate_catch_statistics(&stats, &salad()).is_ok());
    }
}
