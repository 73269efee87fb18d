//! Service configuration and provider endpoint definitions.
//!
//! All configuration is read from the environment once at startup and
//! carried in an explicit [`AppConfig`] passed into the fetch functions;
//! there is no ambient global state beyond the tracing subscriber.

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Statistics provider games endpoint (live games queried with `live=all`)
pub const APISPORTS_GAMES_URL: &str = "https://v1.basketball.api-sports.io/games";

/// Odds provider endpoint for NBA head-to-head markets
pub const ODDS_API_URL: &str = "https://api.the-odds-api.com/v4/sports/basketball_nba/odds";

/// Upstream request timeout in seconds. There is no retry policy on top
/// of this; a failed upstream call fails the board request as a unit.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default bind address when `BIND` is unset
const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Runtime configuration for the board service.
///
/// Both provider credentials are optional: a missing key disables that
/// provider (its fetch degrades to an empty list) rather than failing
/// startup, so the board still renders with partial data.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API-Sports credential, sent as the `x-apisports-key` header
    pub apisports_key: Option<String>,
    /// The Odds API credential, sent as the `apiKey` query parameter
    pub odds_api_key: Option<String>,
    /// HTTP listen address
    pub bind: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `APISPORTS_KEY` and `ODDS_API_KEY` are optional; `BIND` defaults
    /// to `0.0.0.0:3000` and is the only value that can fail parsing.
    pub fn from_env() -> Result<Self> {
        let bind = std::env::var("BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .context("invalid BIND address")?;

        Ok(Self {
            apisports_key: non_empty_var("APISPORTS_KEY"),
            odds_api_key: non_empty_var("ODDS_API_KEY"),
            bind,
        })
    }
}

/// Read an env var, treating unset and blank values the same way
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
