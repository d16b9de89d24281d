use crate::beatmap::BeatmapTotals;
use crate::score::{HitStatistics, PlayInfo, PlayValue, ScoreInfo, SimulationTarget};

use super::target_total;

// goods are droplets, mehs are tiny droplets; misses land on droplets first
pub(super) fn synthesize(totals: &BeatmapTotals, target: &SimulationTarget) -> HitStatistics {
    let max_combo = totals.fruits + totals.droplets;
    let misses = target.misses.min(max_combo);

    let droplets = match target.goods {
        Some(goods) => goods.min(totals.droplets),
        None => totals.droplets.saturating_sub(misses),
    };

    let fruit_misses = misses.saturating_sub(totals.droplets - droplets);
    let fruits = totals.fruits.saturating_sub(fruit_misses);

    let tiny = match target.mehs {
        Some(mehs) => mehs,
        None => target_total(target.accuracy, max_combo + totals.tiny_droplets, 1)
            .saturating_sub(fruits + droplets),
    }
    .min(totals.tiny_droplets);

    HitStatistics {
        great: fruits,
        ok: droplets,
        meh: tiny,
        good: totals.tiny_droplets - tiny,
        miss: misses,
        ..Default::default()
    }
}

pub(super) fn accuracy(stats: &HitStatistics) -> f64 {
    let hits = stats.great + stats.ok + stats.meh;
    let total = hits + stats.miss + stats.good;
    if total == 0 {
        return 0.0;
    }

    f64::from(hits) / f64::from(total)
}

pub(super) fn play_info(score: &ScoreInfo) -> PlayInfo {
    let stats = &score.statistics;
    let mut info = PlayInfo::default();
    info.push("Accuracy", PlayValue::Percent(score.accuracy * 100.0));
    info.push("Combo", PlayValue::Count(score.max_combo));
    info.push("Fruits", PlayValue::Count(stats.great));
    info.push("Droplets", PlayValue::Count(stats.ok));
    info.push("Tiny Droplets", PlayValue::Count(stats.meh));
    info.push("Tiny Misses", PlayValue::Count(stats.good));
    info.push("Misses", PlayValue::Count(stats.miss));
    info
}
