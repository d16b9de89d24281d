// crates/perfcalc-cli/src/cmd/play.rs

use perfcalc_core::score::{CategoryAttributes, PlayInfo};
use perfcalc_core::simulate::PlayResult;
use serde::Serialize;

use crate::io::output::{self, Document, OutputConfig};

#[derive(Serialize)]
struct PlayReport<'a> {
    beatmap: String,
    mods: Vec<&'static str>,
    play_info: &'a PlayInfo,
    category_attribs: &'a CategoryAttributes,
    pp: f64,
}

/// Emit a scored play as text or JSON; both carry the same fields.
pub fn emit(config: &OutputConfig, play: &PlayResult) -> anyhow::Result<()> {
    if config.json {
        let report = PlayReport {
            beatmap: play.beatmap.to_string(),
            mods: play.score.mods.acronyms(),
            play_info: &play.play_info,
            category_attribs: &play.performance.categories,
            pp: play.performance.pp,
        };
        return output::emit_json(config, &report);
    }

    output::emit_text(config, &document(play))
}

fn document(play: &PlayResult) -> Document {
    let mut doc = Document::default();
    doc.line(play.beatmap.to_string());
    doc.blank();

    for (name, value) in play.play_info.iter() {
        doc.attribute(name, value);
    }
    doc.attribute("Mods", play.score.mods);
    doc.blank();

    for (name, value) in play.performance.categories.iter() {
        doc.attribute(name, format!("{value:.2}"));
    }
    doc.blank();
    doc.attribute("pp", format!("{:.2}", play.performance.pp));
    doc
}
