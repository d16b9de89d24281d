use crate::beatmap::BeatmapTotals;
use crate::score::{HitStatistics, PlayInfo, PlayValue, ScoreInfo, SimulationTarget};

use super::target_total;

// great=2, good=1, miss=0
pub(super) fn synthesize(totals: &BeatmapTotals, target: &SimulationTarget) -> HitStatistics {
    let total = totals.objects;
    let miss = target.misses.min(total);
    let remaining = total - miss;

    let great = match target.goods {
        Some(goods) => remaining - goods.min(remaining),
        None => target_total(target.accuracy, total, 2)
            .saturating_sub(remaining)
            .min(remaining),
    };

    HitStatistics {
        great,
        good: remaining - great,
        miss,
        ..Default::default()
    }
}

pub(super) fn accuracy(stats: &HitStatistics) -> f64 {
    let total = stats.great + stats.good + stats.miss;
    if total == 0 {
        return 0.0;
    }

    f64::from(2 * stats.great + stats.good) / f64::from(2 * total)
}

pub(super) fn play_info(score: &ScoreInfo) -> PlayInfo {
    let mut info = PlayInfo::default();
    info.push("Accuracy", PlayValue::Percent(score.accuracy * 100.0));
    info.push("Combo", PlayValue::Count(score.max_combo));
    info.push("Great", PlayValue::Count(score.statistics.great));
    info.push("Good", PlayValue::Count(score.statistics.good));
    info.push("Miss", PlayValue::Count(score.statistics.miss));
    info
}
