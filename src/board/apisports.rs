//! Live game discovery via the API-Sports basketball feed.

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{AppConfig, APISPORTS_GAMES_URL};

use super::types::RawGameRecord;

/// Response envelope from the statistics provider
#[derive(Debug, Deserialize)]
struct ApiSportsEnvelope {
    #[serde(default)]
    response: Vec<RawGameRecord>,
}

/// Fetch all currently live games from the statistics provider.
///
/// A missing credential is not an error: the provider is treated as
/// disabled and the board renders without live games. A non-2xx status
/// or unparseable body fails the request.
pub async fn fetch_live_games(
    http: &reqwest::Client,
    config: &AppConfig,
) -> Result<Vec<RawGameRecord>> {
    let Some(key) = &config.apisports_key else {
        debug!("APISPORTS_KEY not set; skipping statistics fetch");
        return Ok(Vec::new());
    };

    let resp = http
        .get(APISPORTS_GAMES_URL)
        .query(&[("live", "all")])
        .header("x-apisports-key", key)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("API-Sports error {}: {}", status, body);
    }

    let envelope: ApiSportsEnvelope = resp.json().await?;
    info!(
        "Fetched {} live games from API-Sports",
        envelope.response.len()
    );

    Ok(envelope.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_parses_game_records() {
        let envelope: ApiSportsEnvelope = serde_json::from_value(json!({
            "response": [
                {
                    "id": 4321,
                    "teams": {
                        "away": {"name": "Boston Celtics"},
                        "home": {"name": "Miami Heat"}
                    },
                    "scores": {
                        "home": {"total": 99, "quarter_1": 25},
                        "away": {"total": 101, "quarter_1": 28}
                    },
                    "status": {"long": "Game Finished"}
                }
            ]
        }))
        .unwrap();

        assert_eq!(envelope.response.len(), 1);
        let game = &envelope.response[0];
        assert_eq!(game.id, Some(4321));
        assert_eq!(game.teams.away.name.as_deref(), Some("Boston Celtics"));
        assert_eq!(game.status.long.as_deref(), Some("Game Finished"));
    }

    #[test]
    fn test_envelope_missing_response_is_empty() {
        let envelope: ApiSportsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.response.is_empty());
    }
}
