use crate::beatmap::BeatmapTotals;
use crate::score::{HitStatistics, PlayInfo, PlayValue, ScoreInfo, SimulationTarget};

use super::target_total;

// perfect=great=6, good=4, ok=2, meh=1, miss=0 (legacy 300/200/100/50 over 50)
pub(super) fn synthesize(totals: &BeatmapTotals, target: &SimulationTarget) -> HitStatistics {
    let total = totals.objects;
    let miss = target.misses.min(total);
    let remaining = total - miss;

    if target.goods.is_some() || target.mehs.is_some() {
        let good = target.goods.unwrap_or(0).min(remaining);
        let meh = target.mehs.unwrap_or(0).min(remaining - good);

        return HitStatistics {
            perfect: remaining - good - meh,
            good,
            meh,
            miss,
            ..Default::default()
        };
    }

    // Every non-miss starts as a meh; perfects add 5, goods 3, oks 1.
    let delta = target_total(target.accuracy, total, 6).saturating_sub(remaining);
    let perfect = (delta / 5).min(remaining);
    let left = delta - perfect * 5;
    let good = (left / 3).min(remaining - perfect);
    let ok = (left - good * 3).min(remaining - perfect - good);

    HitStatistics {
        perfect,
        good,
        ok,
        meh: remaining - perfect - good - ok,
        miss,
        ..Default::default()
    }
}

pub(super) fn accuracy(stats: &HitStatistics) -> f64 {
    let total = stats.total();
    if total == 0 {
        return 0.0;
    }

    let hits = 6 * (stats.perfect + stats.great) + 4 * stats.good + 2 * stats.ok + stats.meh;
    f64::from(hits) / f64::from(6 * total)
}

pub(super) fn play_info(score: &ScoreInfo) -> PlayInfo {
    let stats = &score.statistics;
    let mut info = PlayInfo::default();
    info.push("Score", PlayValue::Score(score.total_score));
    info.push("Accuracy", PlayValue::Percent(score.accuracy * 100.0));
    info.push("Combo", PlayValue::Count(score.max_combo));
    info.push("Perfect", PlayValue::Count(stats.perfect));
    info.push("Great", PlayValue::Count(stats.great));
    info.push("Good", PlayValue::Count(stats.good));
    info.push("Ok", PlayValue::Count(stats.ok));
    info.push("Meh", PlayValue::Count(stats.meh));
    info.push("Miss", PlayValue::Count(stats.miss));
    info
}
