// crates/perfcalc-cli/src/cmd/difficulty.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use perfcalc_core::calc::{self, DifficultySummary};
use perfcalc_core::{Beatmap, Mods, Ruleset};
use serde::Serialize;

use crate::cmd::OutputArgs;
use crate::io::output::{self, Document};

#[derive(Args, Debug)]
pub struct DifficultyArgs {
    /// A .osu file, or a directory whose .osu files are all computed
    pub path: PathBuf,

    /// Ruleset id to convert to (0 osu!, 1 taiko, 2 catch, 3 mania)
    #[arg(short = 'r', long, value_parser = clap::value_parser!(i64).range(0..=3))]
    pub ruleset: Option<i64>,

    /// Mod acronym, repeatable
    #[arg(short = 'm', long = "mod")]
    pub mods: Vec<String>,

    #[command(flatten)]
    pub out: OutputArgs,
}

#[derive(Serialize)]
struct DifficultyRow {
    beatmap: String,
    beatmap_id: Option<u32>,
    mods: Vec<&'static str>,
    #[serde(flatten)]
    summary: DifficultySummary,
}

pub fn run(args: DifficultyArgs) -> anyhow::Result<()> {
    let ruleset = args.ruleset.map(Ruleset::from_id).transpose()?;
    // Unknown acronyms abort up front; ruleset mismatches stay per beatmap.
    match ruleset {
        Some(ruleset) => {
            Mods::from_acronyms(ruleset, &args.mods)?;
        }
        None => Mods::ensure_known(&args.mods)?,
    }

    let rows = if args.path.is_dir() {
        let mut rows = Vec::new();
        for path in osu_files(&args.path)? {
            match compute(&path, ruleset, &args.mods) {
                Ok(row) => rows.push(row),
                Err(e) => eprintln!("{}: {e:#}", path.display()),
            }
        }
        rows
    } else {
        vec![compute(&args.path, ruleset, &args.mods)?]
    };

    let config = args.out.config();
    if config.json {
        return output::emit_json(&config, &rows);
    }

    let mut doc = Document::default();
    for row in &rows {
        doc.line(&row.beatmap);
        doc.attribute("Ruleset", row.summary.ruleset.short_name());
        if row.mods.is_empty() {
            doc.attribute("Mods", "None");
        } else {
            doc.attribute("Mods", row.mods.join(", "));
        }
        doc.attribute("Star Rating", format!("{:.2}", row.summary.stars));
        doc.attribute("Max Combo", row.summary.max_combo);
        for (name, value) in row.summary.attributes.iter() {
            doc.attribute(name, format!("{value:.2}"));
        }
        doc.blank();
    }
    output::emit_text(&config, &doc)
}

/// `.osu` files directly inside `dir`, sorted by name.
fn osu_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir: {}", dir.display()))? {
        let path = entry?.path();
        let is_osu = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("osu"));
        if is_osu && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn compute(path: &Path, ruleset: Option<Ruleset>, mods: &[String]) -> anyhow::Result<DifficultyRow> {
    let beatmap = Beatmap::from_path(path)?;
    let ruleset = ruleset.unwrap_or_else(|| beatmap.ruleset());
    let mods = Mods::from_acronyms(ruleset, mods)?;
    let summary = calc::compute_difficulty(&beatmap, Some(ruleset), mods)?;

    Ok(DifficultyRow {
        beatmap: beatmap.info.to_string(),
        beatmap_id: beatmap.info.id,
        mods: mods.acronyms(),
        summary,
    })
}
