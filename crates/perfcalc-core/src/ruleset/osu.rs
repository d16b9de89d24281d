use crate::beatmap::BeatmapTotals;
use crate::score::{HitStatistics, PlayInfo, PlayValue, ScoreInfo, SimulationTarget};

use super::target_total;

// great=6, good=2, meh=1, miss=0
pub(super) fn synthesize(totals: &BeatmapTotals, target: &SimulationTarget) -> HitStatistics {
    let total = totals.objects;
    let miss = target.misses.min(total);
    let remaining = total - miss;

    let (great, good, meh) = if target.goods.is_some() || target.mehs.is_some() {
        let good = target.goods.unwrap_or(0).min(remaining);
        let meh = target.mehs.unwrap_or(0).min(remaining - good);
        (remaining - good - meh, good, meh)
    } else {
        // Every non-miss starts as a meh; greats add 5 each, goods add 1 each.
        let delta = target_total(target.accuracy, total, 6).saturating_sub(remaining);
        let great = (delta / 5).min(remaining);
        let good = (delta - great * 5).min(remaining - great);
        (great, good, remaining - great - good)
    };

    HitStatistics {
        great,
        good,
        meh,
        miss,
        ..Default::default()
    }
}

pub(super) fn accuracy(stats: &HitStatistics) -> f64 {
    let total = stats.great + stats.good + stats.meh + stats.miss;
    if total == 0 {
        return 0.0;
    }

    let hits = 6 * stats.great + 2 * stats.good + stats.meh;
    f64::from(hits) / f64::from(6 * total)
}

pub(super) fn play_info(score: &ScoreInfo) -> PlayInfo {
    let mut info = PlayInfo::default();
    info.push("Accuracy", PlayValue::Percent(score.accuracy * 100.0));
    info.push("Combo", PlayValue::Count(score.max_combo));
    info.push("Great", PlayValue::Count(score.statistics.great));
    info.push("Good", PlayValue::Count(score.statistics.good));
    info.push("Meh", PlayValue::Count(score.statistics.meh));
    info.push("Miss", PlayValue::Count(score.statistics.miss));
    info
}
