use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::mods::Mods;

/// Per-judgment hit counts of one play.
///
/// Catch reuses the slots: `great` fruits, `ok` droplets, `meh` tiny droplets
/// hit, `good` tiny droplets missed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HitStatistics {
    pub perfect: u32,
    pub great: u32,
    pub good: u32,
    pub ok: u32,
    pub meh: u32,
    pub miss: u32,
}

impl HitStatistics {
    pub fn total(&self) -> u32 {
        self.perfect + self.great + self.good + self.ok + self.meh + self.miss
    }
}

/// Hit counts in the shape the osu! API and legacy replays report them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyCounts {
    pub n_geki: u32,
    pub n300: u32,
    pub n_katu: u32,
    pub n100: u32,
    pub n50: u32,
    pub misses: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreInfo {
    /// Fraction in `0.0..=1.0`.
    pub accuracy: f64,
    pub max_combo: u32,
    pub statistics: HitStatistics,
    pub mods: Mods,
    pub total_score: u64,
}

/// Requested outcome for a simulated play. Explicit counts win over accuracy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationTarget {
    /// Fraction in `0.0..=1.0`.
    pub accuracy: f64,
    pub misses: u32,
    pub mehs: Option<u32>,
    pub goods: Option<u32>,
}

impl Default for SimulationTarget {
    fn default() -> Self {
        Self {
            accuracy: 1.0,
            misses: 0,
            mehs: None,
            goods: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlayValue {
    Count(u32),
    Score(u64),
    /// Stored as a percentage, e.g. `98.5`.
    Percent(f64),
}

impl fmt::Display for PlayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Score(n) => write!(f, "{n}"),
            Self::Percent(p) => write!(f, "{p:.2}%"),
        }
    }
}

/// Ordered name/value pairs describing a play, shared by the text and JSON
/// renderings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayInfo(Vec<(&'static str, PlayValue)>);

impl PlayInfo {
    pub fn push(&mut self, name: &'static str, value: PlayValue) {
        self.0.push((name, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, PlayValue)> + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, name: &str) -> Option<PlayValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

impl Serialize for PlayInfo {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Named sub-scores reported next to the final pp value, in calculator order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryAttributes(Vec<(&'static str, f64)>);

impl CategoryAttributes {
    pub fn push(&mut self, name: &'static str, value: f64) {
        self.0.push((name, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryAttributes {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
