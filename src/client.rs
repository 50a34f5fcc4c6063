pub mod conv;

use std::sync::RwLock;

use tracing::{debug, warn};
use ureq;

use crate::error::{Error, Result};
use crate::models::app::App;
use crate::models::steam::{
    AppDetailsResponse, AppListResponse, CatalogEntry, OwnedGamesResponse,
    PlayerSummariesResponse,
};
use crate::models::user::{User, UserGame};

const STEAM_API_URL: &str = "https://api.steampowered.com";
const STEAM_STORE_URL: &str = "https://store.steampowered.com";
const STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com";

pub trait AppsServiceHandling {
    /// One bulk fetch of the full (name, id) catalog listing, uncached.
    fn get_all_apps(&self) -> Result<Vec<CatalogEntry>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AppDetailsHandling {
    /// Fetch one app from the store details endpoint.
    fn get_app_details(&self, appid: u32) -> Result<App>;
}

pub trait PlayerServiceHandling {
    /// Fetch a user and their owned games. Requires an api key.
    fn get_user(&self, id64: &str) -> Result<User>;
    /// Fetch just the owned-games relations. Requires an api key.
    fn get_owned_games(&self, id64: &str) -> Result<Vec<UserGame>>;
}

pub trait CommunityFeedHandling {
    /// Fetch a user from the public community games feed, no api key needed.
    fn get_community_user_by_id64(&self, id64: &str) -> Result<User>;
    /// Same feed, addressed by the profile's custom (vanity) name.
    fn get_community_user_by_name(&self, name: &str) -> Result<User>;
}

/// Entry point for everything in this crate.
///
/// Holds the optional api key and a lazily populated catalog listing used for
/// name lookups. Construction never touches the network; the catalog is
/// fetched on first use and kept until a caller asks for a refresh.
pub struct Client {
    api_key: Option<String>,
    api_url: String,
    store_url: String,
    community_url: String,
    catalog: RwLock<Option<Vec<CatalogEntry>>>,
}

impl Client {
    pub fn new(api_key: Option<&str>) -> Client {
        Client::with_urls(
            api_key,
            STEAM_API_URL,
            STEAM_STORE_URL,
            STEAM_COMMUNITY_URL,
        )
    }

    /// Build a client against alternative hosts, e.g. a local mock server.
    pub fn with_urls(
        api_key: Option<&str>,
        api_url: &str,
        store_url: &str,
        community_url: &str,
    ) -> Client {
        Client {
            api_key: api_key.map(String::from),
            api_url: api_url.trim_end_matches('/').to_string(),
            store_url: store_url.trim_end_matches('/').to_string(),
            community_url: community_url.trim_end_matches('/').to_string(),
            catalog: RwLock::new(None),
        }
    }

    fn key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::ApiKeyRequired)
    }

    /// Run `f` against the cached catalog, fetching it first if it is not
    /// loaded yet or `refresh` is set.
    fn with_catalog<T>(
        &self,
        refresh: bool,
        f: impl FnOnce(&[CatalogEntry]) -> T,
    ) -> Result<T> {
        if !refresh {
            let cached = self.catalog.read().expect("catalog lock poisoned");
            if let Some(ref entries) = *cached {
                return Ok(f(entries));
            }
        }

        let entries = self.get_all_apps()?;
        debug!(entries = entries.len(), "steam catalog fetched");

        let mut cached = self.catalog.write().expect("catalog lock poisoned");
        Ok(f(cached.insert(entries)))
    }

    /// The full catalog listing. A no-op returning the cached copy unless the
    /// catalog is unloaded or `refresh` is set, in which case one bulk fetch
    /// replaces the cache wholesale.
    pub fn fetch_catalog(&self, refresh: bool) -> Result<Vec<CatalogEntry>> {
        self.with_catalog(refresh, |entries| entries.to_vec())
    }

    /// Resolve an app name to its id by scanning the catalog in order and
    /// taking the first match. Case sensitive unless told otherwise.
    pub fn resolve_id_by_name(&self, name: &str, case_sensitive: bool) -> Result<u32> {
        self.with_catalog(false, |entries| {
            entries
                .iter()
                .find(|e| name_matches(&e.name, name, case_sensitive))
                .map(|e| e.appid)
        })?
        .ok_or_else(|| Error::AppNotFound(name.to_string()))
    }

    /// Every catalog entry whose name matches, in catalog order, duplicates
    /// included. `refresh` repopulates the catalog first.
    pub fn search_apps(
        &self,
        name: &str,
        case_sensitive: bool,
        refresh: bool,
    ) -> Result<Vec<CatalogEntry>> {
        self.with_catalog(refresh, |entries| {
            entries
                .iter()
                .filter(|e| name_matches(&e.name, name, case_sensitive))
                .cloned()
                .collect()
        })
    }

    /// Fetch one app by id or by name. Exactly one of the two is required;
    /// when both are given the id wins and the name is never looked at.
    pub fn get_app(
        &self,
        appid: Option<u32>,
        name: Option<&str>,
        case_sensitive: bool,
    ) -> Result<App> {
        match (appid, name) {
            (Some(id), _) => self.get_app_details(id),
            (None, Some(name)) => {
                let id = self.resolve_id_by_name(name, case_sensitive)?;
                self.get_app_details(id)
            }
            (None, None) => Err(Error::MissingArguments(
                "one of `appid` or `name` is required",
            )),
        }
    }

    /// Fetch the apps listed in `app.dlc`, one request each. Entries that
    /// have vanished from the store are skipped; transport errors propagate.
    pub fn get_dlc(&self, app: &App) -> Result<Vec<App>> {
        let mut dlc = Vec::with_capacity(app.dlc.len());
        for &id in &app.dlc {
            match self.get_app_details(id) {
                Ok(d) => dlc.push(d),
                Err(Error::AppNotFound(missing)) => {
                    warn!(appid = %missing, parent = app.appid, "dlc not on the store, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(dlc)
    }

    fn games_feed(&self, path: &str, queried: &str) -> Result<User> {
        let url = format!("{}/{}/games", self.community_url, path);
        let body = ureq::get(&url)
            .query("tab", "all")
            .query("xml", "1")
            .call()?
            .into_string()?;

        conv::extract_feed_user(&body, queried)
    }
}

fn name_matches(catalog_name: &str, query: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        catalog_name == query
    } else {
        catalog_name.to_lowercase() == query.to_lowercase()
    }
}

impl AppsServiceHandling for Client {
    fn get_all_apps(&self) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/ISteamApps/GetAppList/v0001/", self.api_url);
        let res = ureq::get(&url).call()?.into_json::<AppListResponse>()?;

        Ok(res.applist.apps.app)
    }
}

impl AppDetailsHandling for Client {
    fn get_app_details(&self, appid: u32) -> Result<App> {
        let url = format!("{}/api/appdetails", self.store_url);
        let id = appid.to_string();
        let mut res = ureq::get(&url)
            .query("appids", &id)
            .query("format", "json")
            .call()?
            .into_json::<AppDetailsResponse>()?;

        let entry = res
            .results
            .remove(&id)
            .ok_or_else(|| Error::AppNotFound(id.clone()))?;

        conv::extract_app(appid, entry)
    }
}

impl PlayerServiceHandling for Client {
    fn get_user(&self, id64: &str) -> Result<User> {
        let key = self.key()?;
        let url = format!("{}/ISteamUser/GetPlayerSummaries/v0002/", self.api_url);
        let res = ureq::get(&url)
            .query("key", key)
            .query("steamids", id64)
            .call()?
            .into_json::<PlayerSummariesResponse>()?;

        let raw = res
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| Error::UserNotFound(id64.to_string()))?;

        let games = self.get_owned_games(id64)?;
        conv::extract_user(raw, games)
    }

    fn get_owned_games(&self, id64: &str) -> Result<Vec<UserGame>> {
        let key = self.key()?;
        let url = format!("{}/IPlayerService/GetOwnedGames/v0001/", self.api_url);
        let res = ureq::get(&url)
            .query("key", key)
            .query("steamid", id64)
            .query("include_appinfo", "1")
            .query("format", "json")
            .call()?
            .into_json::<OwnedGamesResponse>()?;

        Ok(res
            .response
            .games
            .into_iter()
            .map(|g| conv::owned_game_to_relation(g, id64))
            .collect())
    }
}

impl CommunityFeedHandling for Client {
    fn get_community_user_by_id64(&self, id64: &str) -> Result<User> {
        self.games_feed(&format!("profiles/{}", id64), id64)
    }

    fn get_community_user_by_name(&self, name: &str) -> Result<User> {
        self.games_feed(&format!("id/{}", name), name)
    }
}
