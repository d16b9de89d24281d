// crates/perfcalc-cli/src/io/api.rs

//! osu! API v1 client. The API reports most numbers as JSON strings, so the
//! response structs parse them while deserializing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use perfcalc_core::Ruleset;
use reqwest::blocking::Client;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::io::cache::BeatmapFetcher;

pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh";
pub const DEFAULT_CACHE_DIR: &str = "cache";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub cache_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiUser {
    pub username: String,
    /// `null` for users without ranked plays.
    #[serde(default, deserialize_with = "opt_num")]
    pub pp_raw: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiScore {
    #[serde(deserialize_with = "num")]
    pub beatmap_id: u32,
    #[serde(default, deserialize_with = "opt_num")]
    pub score: Option<u64>,
    #[serde(deserialize_with = "num")]
    pub maxcombo: u32,
    #[serde(deserialize_with = "num")]
    pub count50: u32,
    #[serde(deserialize_with = "num")]
    pub count100: u32,
    #[serde(deserialize_with = "num")]
    pub count300: u32,
    #[serde(deserialize_with = "num")]
    pub countmiss: u32,
    #[serde(deserialize_with = "num")]
    pub countkatu: u32,
    #[serde(deserialize_with = "num")]
    pub countgeki: u32,
    #[serde(deserialize_with = "num")]
    pub enabled_mods: u32,
    #[serde(default, deserialize_with = "opt_num")]
    pub pp: Option<f64>,
}

fn parse_value<T, E>(value: Value) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: fmt::Display,
    E: de::Error,
{
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => return Err(E::custom(format!("expected a number, got {other}"))),
    };

    text.trim().parse().map(Some).map_err(E::custom)
}

fn num<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_value::<T, D::Error>(Value::deserialize(d)?)?
        .ok_or_else(|| de::Error::custom("unexpected null"))
}

fn opt_num<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_value::<T, D::Error>(Value::deserialize(d)?)
}

/// Where a player's record and top plays come from.
pub trait PlayerSource {
    fn user(&self, username: &str, ruleset: Ruleset) -> anyhow::Result<ApiUser>;

    /// Top plays, best first. Records that fail to decode are dropped
    /// individually.
    fn user_best(
        &self,
        username: &str,
        ruleset: Ruleset,
        limit: u32,
    ) -> anyhow::Result<Vec<ApiScore>>;
}

pub struct OsuApi {
    client: Client,
    base_url: String,
    key: String,
}

impl OsuApi {
    pub fn new(config: &ApiConfig, key: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("perfcalc/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            key: key.into(),
        })
    }

    fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> anyhow::Result<Value> {
        let url = format!("{}/api/{endpoint}", self.base_url);
        log::debug!("GET {url}");

        let mut query = vec![("k", self.key.clone())];
        query.extend(params.iter().map(|(k, v)| (*k, v.clone())));

        self.client
            .get(&url)
            .query(&query)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("request {endpoint}"))?
            .json()
            .with_context(|| format!("parse {endpoint} response"))
    }
}

fn decode_records(records: Vec<Value>) -> Vec<ApiScore> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(score) => Some(score),
            Err(e) => {
                log::warn!("skipping top play #{}: {e}", i + 1);
                None
            }
        })
        .collect()
}

impl PlayerSource for OsuApi {
    fn user(&self, username: &str, ruleset: Ruleset) -> anyhow::Result<ApiUser> {
        let body = self.get_json(
            "get_user",
            &[
                ("u", username.to_owned()),
                ("m", ruleset.id().to_string()),
                ("type", "username".to_owned()),
            ],
        )?;

        let mut users: Vec<ApiUser> =
            serde_json::from_value(body).context("decode get_user response")?;
        if users.is_empty() {
            bail!("user {username} not found");
        }
        Ok(users.swap_remove(0))
    }

    fn user_best(
        &self,
        username: &str,
        ruleset: Ruleset,
        limit: u32,
    ) -> anyhow::Result<Vec<ApiScore>> {
        let body = self.get_json(
            "get_user_best",
            &[
                ("u", username.to_owned()),
                ("m", ruleset.id().to_string()),
                ("limit", limit.to_string()),
                ("type", "username".to_owned()),
            ],
        )?;

        let Value::Array(records) = body else {
            bail!("get_user_best did not return a list");
        };

        Ok(decode_records(records))
    }
}

impl BeatmapFetcher for OsuApi {
    fn fetch_beatmap(&self, beatmap_id: u32) -> anyhow::Result<Vec<u8>> {
        let url = format!("{}/osu/{beatmap_id}", self.base_url);
        log::info!("fetching beatmap {beatmap_id}");

        let bytes = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .with_context(|| format!("GET {url}"))?;

        Ok(bytes.to_vec())
    }
}
