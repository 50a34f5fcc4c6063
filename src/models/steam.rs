
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::app::{Metacritic, Platforms, PriceOverview};

/// One (name, id) pair from the bulk catalog listing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub appid: u32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppList {
    pub apps: AppListApps,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppListApps {
    pub app: Vec<CatalogEntry>,
}

/// Response of the store appdetails endpoint, keyed by the requested appid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppDetailsResponse {
    #[serde(flatten)]
    pub results: HashMap<String, AppDetailsEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppDetailsEntry {
    pub success: bool,
    /// Kept as raw json so the full source document can be retained on the
    /// extracted entity.
    pub data: Option<Value>,
}

/// Typed projection of an appdetails `data` document. Anything steam may omit
/// is an `Option` or defaults to empty.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppDetailsData {
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: String,
    pub steam_appid: u32,
    #[serde(default)]
    pub required_age: u32,
    #[serde(default)]
    pub is_free: bool,
    pub detailed_description: Option<String>,
    pub about_the_game: Option<String>,
    pub short_description: Option<String>,
    pub supported_languages: Option<String>,
    pub header_image: Option<String>,
    pub website: Option<String>,
    pub controller_support: Option<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub dlc: Vec<u32>,
    pub release_date: Option<ReleaseDate>,
    pub price_overview: Option<PriceOverview>,
    pub metacritic: Option<Metacritic>,
    pub platforms: Option<Platforms>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub description: String,
}

// Genre ids come back as strings, category ids as numbers; only the
// description is surfaced either way.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Screenshot {
    pub path_full: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ReleaseDate {
    pub coming_soon: bool,
    pub date: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerSummariesResponse {
    pub response: PlayerSummaries,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerSummaries {
    /// Raw player documents; an unknown id64 yields an empty list.
    #[serde(default)]
    pub players: Vec<Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: String,
    pub profileurl: Option<String>,
    pub avatarfull: Option<String>,
    #[serde(default)]
    pub personastate: u8,
    #[serde(default)]
    pub communityvisibilitystate: u8,
    pub lastlogoff: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OwnedGamesResponse {
    pub response: OwnedGames,
}

// A private profile answers with an empty response object, hence the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OwnedGames {
    #[serde(default)]
    pub game_count: u32,
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OwnedGame {
    pub appid: u32,
    #[serde(default)]
    pub playtime_forever: u64,
    pub name: Option<String>,
}
