use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PerfError, Result};
use crate::ruleset::Ruleset;

/// Display metadata of a beatmap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BeatmapInfo {
    pub id: Option<u32>,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub version: String,
}

impl fmt::Display for BeatmapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{}]",
            self.artist, self.title, self.creator, self.version
        )
    }
}

/// Judged-object counts of a beatmap once a ruleset and mods are applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BeatmapTotals {
    pub max_combo: u32,
    /// Objects that receive a judgment (osu!, taiko, mania) or every catch
    /// object including tiny droplets.
    pub objects: u32,
    pub fruits: u32,
    pub droplets: u32,
    pub tiny_droplets: u32,
}

/// A parsed, immutable beatmap file.
pub struct Beatmap {
    pub path: PathBuf,
    pub info: BeatmapInfo,
    pub(crate) map: rosu_pp::Beatmap,
}

impl Beatmap {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wrap = |source: Box<dyn std::error::Error + Send + Sync>| PerfError::Beatmap {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(|e| wrap(e.into()))?;
        let meta = rosu_map::Beatmap::from_bytes(&bytes).map_err(|e| wrap(e.into()))?;
        let map = rosu_pp::Beatmap::from_bytes(&bytes).map_err(|e| wrap(e.into()))?;

        let info = BeatmapInfo {
            id: u32::try_from(meta.beatmap_id).ok().filter(|&id| id > 0),
            artist: meta.artist,
            title: meta.title,
            creator: meta.creator,
            version: meta.version,
        };

        log::debug!("parsed beatmap {} from {}", info, path.display());

        Ok(Self {
            path: path.to_path_buf(),
            info,
            map,
        })
    }

    /// Override the id read from the file, e.g. with the id it was downloaded under.
    pub fn with_id(mut self, id: u32) -> Self {
        self.info.id = Some(id);
        self
    }

    /// The ruleset the beatmap was authored for.
    pub fn ruleset(&self) -> Ruleset {
        Ruleset::from_game_mode(self.map.mode)
    }
}
