
use std::time::Duration;

use chrono::DateTime;
use roxmltree::{Document, Node};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::app::App;
use crate::models::steam::{AppDetailsData, AppDetailsEntry, OwnedGame, PlayerSummary};
use crate::models::user::{PersonaState, User, UserGame};

// communityvisibilitystate code for a fully public profile
const VISIBILITY_PUBLIC: u8 = 3;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: f64 = 3600.0;

/// Map one appdetails entry onto an [`App`], keeping the source document on
/// the entity. A `success: false` entry means the id is not on the store.
pub(super) fn extract_app(appid: u32, entry: AppDetailsEntry) -> Result<App> {
    let raw = match entry {
        AppDetailsEntry {
            success: true,
            data: Some(data),
        } => data,
        _ => return Err(Error::AppNotFound(appid.to_string())),
    };
    let data: AppDetailsData = serde_json::from_value(raw.clone())?;

    Ok(App {
        appid: data.steam_appid,
        name: data.name,
        app_type: data.app_type,
        required_age: data.required_age,
        is_free: data.is_free,
        detailed_description: data.detailed_description,
        about_the_game: data.about_the_game,
        short_description: data.short_description,
        supported_languages: data.supported_languages,
        header_image: data.header_image,
        website: data.website,
        controller_support: data.controller_support,
        developers: data.developers,
        publishers: data.publishers,
        categories: data.categories.into_iter().map(|c| c.description).collect(),
        genres: data.genres.into_iter().map(|g| g.description).collect(),
        screenshots: data.screenshots.into_iter().map(|s| s.path_full).collect(),
        release_date: data.release_date.as_ref().map(|r| r.date.clone()),
        coming_soon: data.release_date.map(|r| r.coming_soon).unwrap_or(false),
        price_overview: data.price_overview,
        metacritic: data.metacritic,
        platforms: data.platforms.unwrap_or_default(),
        dlc: data.dlc,
        raw,
    })
}

/// Build a [`User`] from one raw player-summary document plus the already
/// fetched owned-games relations.
pub(super) fn extract_user(raw: Value, games: Vec<UserGame>) -> Result<User> {
    let summary: PlayerSummary = serde_json::from_value(raw.clone())?;

    Ok(User {
        id64: summary.steamid,
        name: summary.personaname,
        profile_url: summary.profileurl,
        avatar: summary.avatarfull,
        status: PersonaState::from_code(summary.personastate),
        private: summary.communityvisibilitystate != VISIBILITY_PUBLIC,
        last_online: summary
            .lastlogoff
            .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        games,
        raw,
    })
}

pub(super) fn owned_game_to_relation(game: OwnedGame, player_id: &str) -> UserGame {
    UserGame {
        appid: game.appid,
        player_id: player_id.to_string(),
        name: game.name,
        play_time: Duration::from_secs(game.playtime_forever * SECS_PER_MINUTE),
        store_link: None,
        stats_link: None,
        player_stats_link: None,
        game: None,
    }
}

/// Parse the community games feed into a [`User`].
///
/// The feed is positional: id64, then the persona id, then the games
/// container. A document without that triple (steam answers an `<error>`
/// element for unknown accounts) is treated as user-not-found.
pub(super) fn extract_feed_user(xml: &str, queried: &str) -> Result<User> {
    let doc = Document::parse(xml)?;
    let mut children = doc.root_element().children().filter(|n| n.is_element());

    let (id64, name, games) = match (children.next(), children.next(), children.next()) {
        (Some(id64), Some(name), Some(games)) => (id64, name, games),
        _ => return Err(Error::UserNotFound(queried.to_string())),
    };

    let id64 = text_of(&id64);
    let games = games
        .children()
        .filter(|n| n.is_element())
        .filter_map(|g| feed_game_to_relation(&g, &id64))
        .collect();

    Ok(User {
        id64: id64.clone(),
        name: text_of(&name),
        profile_url: None,
        avatar: None,
        status: PersonaState::Offline,
        private: false,
        last_online: None,
        games,
        raw: Value::Null,
    })
}

fn feed_game_to_relation(node: &Node, player_id: &str) -> Option<UserGame> {
    let find = |tag: &str| {
        node.children()
            .find(|n| n.has_tag_name(tag))
            .and_then(|n| n.text())
            .map(|t| t.trim().to_string())
    };

    let appid = match find("appID").and_then(|t| t.parse::<u32>().ok()) {
        Some(id) => id,
        None => {
            warn!(player = player_id, "games feed entry without an appID, skipping");
            return None;
        }
    };

    // Hours come formatted for display, e.g. "1,217.4". Anything that does
    // not parse to a usable duration counts as unrecorded.
    let hours = find("hoursOnRecord")
        .and_then(|t| t.replace(',', "").parse::<f64>().ok())
        .filter(|h| h.is_finite() && *h >= 0.0)
        .unwrap_or(0.0);

    Some(UserGame {
        appid,
        player_id: player_id.to_string(),
        name: find("name"),
        play_time: Duration::from_secs_f64(hours * SECS_PER_HOUR),
        store_link: find("storeLink"),
        stats_link: find("globalStatsLink"),
        player_stats_link: find("statsLink"),
        game: None,
    })
}

fn text_of(node: &Node) -> String {
    node.text().map(str::trim).unwrap_or_default().to_string()
}
