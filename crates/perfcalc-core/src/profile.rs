//! Profile aggregation: weighted pp totals over a player's top plays and the
//! per-play comparison between recomputed and server values.

use serde::Serialize;

pub const WEIGHT_DECAY: f64 = 0.95;

/// One top play with both pp values.
#[derive(Clone, Debug, PartialEq)]
pub struct UserPlayInfo {
    pub beatmap_id: u32,
    pub beatmap_name: String,
    pub mods: Vec<String>,
    pub local_pp: f64,
    pub live_pp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayDelta {
    pub beatmap_id: u32,
    pub beatmap_name: String,
    pub mods: Vec<String>,
    pub live_pp: f64,
    pub local_pp: f64,
    pub pp_delta: f64,
    /// Live rank minus local rank; positive means the play moved up.
    pub position_delta: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub live_pp: f64,
    pub local_pp: f64,
    pub bonus_pp: f64,
    /// Ordered by local pp, highest first.
    pub display_plays: Vec<PlayDelta>,
}

/// `Σ 0.95^i · value_i` over `values` in the given order.
pub fn weighted_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .enumerate()
        .map(|(rank, value)| WEIGHT_DECAY.powi(rank as i32) * value)
        .sum()
}

/// Indices of `plays` sorted descending by `key`; ties keep input order.
fn ordering(plays: &[UserPlayInfo], key: impl Fn(&UserPlayInfo) -> f64) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..plays.len()).collect();
    idx.sort_by(|&a, &b| key(&plays[b]).total_cmp(&key(&plays[a])));
    idx
}

/// Aggregate recomputed plays against the server total.
///
/// The bonus is the server total minus the weighted live top plays, which
/// only approximates the playcount bonus; it is added to the local total as-is.
pub fn summarize(username: String, server_total: f64, plays: Vec<UserPlayInfo>) -> ProfileSummary {
    let local_order = ordering(&plays, |p| p.local_pp);
    let live_order = ordering(&plays, |p| p.live_pp);

    let weighted_local = weighted_sum(local_order.iter().map(|&i| plays[i].local_pp));
    let non_bonus_live = weighted_sum(live_order.iter().map(|&i| plays[i].live_pp));
    let bonus_pp = server_total - non_bonus_live;

    let mut live_rank = vec![0usize; plays.len()];
    for (rank, &i) in live_order.iter().enumerate() {
        live_rank[i] = rank;
    }

    let display_plays = local_order
        .iter()
        .enumerate()
        .map(|(local_rank, &i)| {
            let play = &plays[i];
            PlayDelta {
                beatmap_id: play.beatmap_id,
                beatmap_name: play.beatmap_name.clone(),
                mods: play.mods.clone(),
                live_pp: play.live_pp,
                local_pp: play.local_pp,
                pp_delta: play.local_pp - play.live_pp,
                position_delta: live_rank[i] as i64 - local_rank as i64,
            }
        })
        .collect();

    ProfileSummary {
        username,
        live_pp: server_total,
        local_pp: weighted_local + bonus_pp,
        bonus_pp,
        display_plays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_sum_of_ones_is_geometric_series() {
        let got = weighted_sum([1.0; 3]);
        assert!((got - (1.0 + 0.95 + 0.9025)).abs() < 1e-12);
    }

    #[test]
    fn empty_profile_has_all_pp_as_bonus() {
        let s = summarize("nobody".into(), 1234.5, Vec::new());
        assert_eq!(s.bonus_pp, 1234.5);
        assert_eq!(s.local_pp, 1234.5);
        assert!(s.display_plays.is_empty());
    }
}
