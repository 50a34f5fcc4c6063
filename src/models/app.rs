use serde::Deserialize;
use serde_json::Value;

/// One item on the steam storefront: a game, dlc, soundtrack or tool.
///
/// Mandatory fields (`appid`, `name`, `app_type`) are always present on a
/// successfully fetched app; everything else falls back to `None`, `false` or
/// an empty list when the store document omits it. The unmodified source
/// document is kept in `raw` for fields not surfaced here.
#[derive(Clone, Debug, PartialEq)]
pub struct App {
    pub appid: u32,
    pub name: String,
    /// What kind of catalog item this is, e.g. "game" or "dlc".
    pub app_type: String,
    /// Required purchase age, 0 when unrestricted.
    pub required_age: u32,
    pub is_free: bool,
    pub detailed_description: Option<String>,
    pub about_the_game: Option<String>,
    pub short_description: Option<String>,
    pub supported_languages: Option<String>,
    pub header_image: Option<String>,
    pub website: Option<String>,
    pub controller_support: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    /// Full-size screenshot urls, store order.
    pub screenshots: Vec<String>,
    pub release_date: Option<String>,
    pub coming_soon: bool,
    /// Absent for free or unreleased apps.
    pub price_overview: Option<PriceOverview>,
    pub metacritic: Option<Metacritic>,
    pub platforms: Platforms,
    /// Appids of this app's dlc. Fetch them with [`crate::Client::get_dlc`];
    /// they are never fetched eagerly.
    pub dlc: Vec<u32>,
    /// The source `data` document, exactly as steam returned it.
    pub raw: Value,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PriceOverview {
    pub currency: String,
    /// Pre-discount price in the currency's smallest unit.
    pub initial: u64,
    #[serde(rename = "final")]
    pub final_price: u64,
    pub discount_percent: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Metacritic {
    pub score: u32,
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Platforms {
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub mac: bool,
    #[serde(default)]
    pub linux: bool,
}
