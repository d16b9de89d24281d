// crates/perfcalc-cli/src/cmd/profile.rs

use anyhow::{bail, Context};
use clap::Args;
use perfcalc_core::profile::{self, ProfileSummary, UserPlayInfo};
use perfcalc_core::score::ScoreInfo;
use perfcalc_core::{Beatmap, LegacyCounts, Mods, Ruleset};

use crate::cmd::OutputArgs;
use crate::io::api::{ApiConfig, ApiScore, OsuApi, PlayerSource};
use crate::io::cache::{BeatmapCache, BeatmapFetcher};
use crate::io::output::{self, format_position_delta, Align, Document, Grid, OutputConfig};

const TOP_PLAYS: u32 = 100;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Username of the player
    pub user: String,

    /// osu! API v1 key
    pub api_key: String,

    /// Ruleset id (0 osu!, 1 taiko, 2 catch, 3 mania)
    #[arg(short = 'r', long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=3))]
    pub ruleset: i64,

    #[command(flatten)]
    pub out: OutputArgs,
}

pub fn run(args: ProfileArgs, api_config: &ApiConfig) -> anyhow::Result<()> {
    let ruleset = Ruleset::from_id(args.ruleset)?;
    let config = args.out.config();
    let api = OsuApi::new(api_config, &args.api_key)?;
    let cache = BeatmapCache::new(&api_config.cache_dir, &api);

    let summary = collect(&api, &cache, &config, &args.user, ruleset)?;

    if config.json {
        return output::emit_json(&config, &summary);
    }
    output::emit_text(&config, &document(&summary))
}

/// Fetch the player's top plays, recompute each one and aggregate. A play
/// that cannot be recomputed is logged and left out.
pub fn collect<S: PlayerSource, F: BeatmapFetcher>(
    source: &S,
    cache: &BeatmapCache<F>,
    config: &OutputConfig,
    username: &str,
    ruleset: Ruleset,
) -> anyhow::Result<ProfileSummary> {
    progress(config, "Getting user data...");
    let user = source.user(username, ruleset)?;

    progress(config, "Getting user top scores...");
    let scores = source.user_best(username, ruleset, TOP_PLAYS)?;

    let mut plays = Vec::with_capacity(scores.len());
    for score in &scores {
        match local_play(cache, config, ruleset, score) {
            Ok(play) => plays.push(play),
            Err(e) => log::warn!("skipping play on beatmap {}: {e:#}", score.beatmap_id),
        }
    }

    Ok(profile::summarize(
        user.username,
        user.pp_raw.unwrap_or(0.0),
        plays,
    ))
}

fn progress(config: &OutputConfig, message: &str) {
    if !config.json {
        println!("{message}");
    }
}

fn local_play<F: BeatmapFetcher>(
    cache: &BeatmapCache<F>,
    config: &OutputConfig,
    ruleset: Ruleset,
    score: &ApiScore,
) -> anyhow::Result<UserPlayInfo> {
    let Some(live_pp) = score.pp else {
        bail!("play has no pp value");
    };

    if !cache.contains(score.beatmap_id) {
        progress(config, &format!("Downloading {}.osu...", score.beatmap_id));
    }
    let path = cache.fetch(score.beatmap_id)?;
    let beatmap = Beatmap::from_path(&path)?.with_id(score.beatmap_id);

    let mods = Mods::from_legacy_bits(ruleset, score.enabled_mods);
    let statistics = ruleset.from_legacy(&LegacyCounts {
        n_geki: score.countgeki,
        n300: score.count300,
        n_katu: score.countkatu,
        n100: score.count100,
        n50: score.count50,
        misses: score.countmiss,
    });

    let info = ScoreInfo {
        accuracy: ruleset.accuracy(&statistics),
        max_combo: score.maxcombo,
        statistics,
        mods,
        total_score: score.score.unwrap_or(0),
    };

    let local = perfcalc_core::calc::compute_performance(&beatmap, ruleset, &info)
        .with_context(|| format!("compute pp for {}", beatmap.info))?;

    Ok(UserPlayInfo {
        beatmap_id: score.beatmap_id,
        beatmap_name: beatmap.info.to_string(),
        mods: mods.acronyms().into_iter().map(str::to_owned).collect(),
        local_pp: local.pp,
        live_pp,
    })
}

fn document(summary: &ProfileSummary) -> Document {
    let mut doc = Document::default();
    doc.line(format!("User:     {}", summary.username));
    doc.line(format!(
        "Live PP:  {:.1} (including {:.1}pp from playcount)",
        summary.live_pp, summary.bonus_pp
    ));
    doc.line(format!("Local PP: {:.1}", summary.local_pp));
    doc.blank();

    let mut grid = Grid::new([
        ("beatmap", Align::Left),
        ("mods", Align::Left),
        ("live pp", Align::Right),
        ("local pp", Align::Right),
        ("pp change", Align::Right),
        ("position change", Align::Center),
    ]);

    for play in &summary.display_plays {
        grid.row(vec![
            format!("{} - {}", play.beatmap_id, play.beatmap_name),
            play.mods.join(", "),
            format!("{:.1}", play.live_pp),
            format!("{:.1}", play.local_pp),
            format!("{:.1}", play.pp_delta),
            format_position_delta(play.position_delta),
        ]);
    }

    doc.grid(grid);
    doc
}
