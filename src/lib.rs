//! Thin synchronous client for the Steam Web API and the Steam Community
//! XML feeds.
//!
//! Build a [`Client`], optionally with an API key, and ask it for apps and
//! users. Every call that touches the network blocks until Steam answers;
//! there is no retry, caching (beyond the catalog listing), or rate limiting.
//!
//! ```no_run
//! use steamfront::Client;
//!
//! let client = Client::new(None);
//! let app = client.get_app(Some(400), None, true).unwrap();
//! assert_eq!(app.name, "Portal");
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{
    AppDetailsHandling, AppsServiceHandling, Client, CommunityFeedHandling,
    PlayerServiceHandling,
};
pub use error::{Error, Result};
