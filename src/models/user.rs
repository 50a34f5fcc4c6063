
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::client::AppDetailsHandling;
use crate::error::Result;
use crate::models::app::App;

/// Online status of a steam account, decoded from the numeric
/// `personastate` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonaState {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl PersonaState {
    /// Codes outside the documented 0..=6 range fold to `Offline`, matching
    /// what steam reports for accounts it will not disclose.
    pub fn from_code(code: u8) -> PersonaState {
        match code {
            1 => PersonaState::Online,
            2 => PersonaState::Busy,
            3 => PersonaState::Away,
            4 => PersonaState::Snooze,
            5 => PersonaState::LookingToTrade,
            6 => PersonaState::LookingToPlay,
            _ => PersonaState::Offline,
        }
    }
}

/// One steam account together with its owned games.
///
/// Built either from the credentialed player-summary endpoints or from the
/// uncredentialed community games feed. The feed carries no profile metadata,
/// so the optional fields stay `None` and `raw` is `Value::Null` on that path.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id64: String,
    /// Persona (display) name.
    pub name: String,
    pub profile_url: Option<String>,
    pub avatar: Option<String>,
    pub status: PersonaState,
    /// Whether the profile's visibility state hides it from us.
    pub private: bool,
    pub last_online: Option<DateTime<Utc>>,
    /// Fixed at construction time; fetch the user again for a fresh view.
    pub games: Vec<UserGame>,
    /// The source player document, `Value::Null` for community-feed users.
    pub raw: Value,
}

/// The ownership edge between a [`User`] and an app: playtime and store
/// links, plus a lazily resolved handle to the full [`App`].
#[derive(Clone, Debug, PartialEq)]
pub struct UserGame {
    pub appid: u32,
    /// id64 of the owning user, for attribution.
    pub player_id: String,
    /// Known from the community feed; the owned-games endpoint omits it.
    pub name: Option<String>,
    /// Total recorded playtime; zero when steam reports none.
    pub play_time: Duration,
    pub store_link: Option<String>,
    pub stats_link: Option<String>,
    pub player_stats_link: Option<String>,
    pub(crate) game: Option<App>,
}

impl UserGame {
    /// The full catalog entity behind this relation.
    ///
    /// The first call fetches the app through `client` and caches it; later
    /// calls return the cached value without touching the network. The fetch
    /// can fail with [`crate::Error::AppNotFound`] if the title has been
    /// delisted since the library snapshot was taken.
    pub fn game(&mut self, client: &impl AppDetailsHandling) -> Result<&App> {
        let game = match self.game.take() {
            Some(app) => app,
            None => client.get_app_details(self.appid)?,
        };
        Ok(self.game.insert(game))
    }

    /// The cached [`App`], if [`UserGame::game`] has resolved it already.
    pub fn game_if_resolved(&self) -> Option<&App> {
        self.game.as_ref()
    }
}
