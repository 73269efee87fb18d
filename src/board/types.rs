//! Raw provider records and the merged board output model.
//!
//! Raw types are deserialized straight off the provider payloads and are
//! deliberately tolerant: a malformed record should degrade to empty
//! fields handled by the merge logic, never fail the whole response.
//! Everything here is built fresh per request; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Statistics provider (API-Sports)
// =============================================================================

/// One live game as returned by the statistics provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub teams: GameTeams,
    #[serde(default)]
    pub scores: GameScores,
    #[serde(default)]
    pub status: GameStatus,
}

/// Away/home team references within a game record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameTeams {
    #[serde(default)]
    pub away: TeamRef,
    #[serde(default)]
    pub home: TeamRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Per-side score payloads, kept as raw JSON.
///
/// The feed mixes naming conventions (`quarter_N` vs `period_N`, with
/// overtime variants) and omits keys mid-game, so the score extractor
/// walks the raw value instead of a fixed struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameScores {
    #[serde(default)]
    pub home: Value,
    #[serde(default)]
    pub away: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameStatus {
    /// Long-form status description (e.g. "Game Finished")
    #[serde(default)]
    pub long: Option<String>,
}

// =============================================================================
// Odds provider (The Odds API)
// =============================================================================

/// One matchup as returned by the odds provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOddsRecord {
    /// The two listed team display names. Records without exactly two
    /// entries are skipped by the indexer.
    #[serde(default)]
    pub teams: Option<Vec<String>>,
    /// Which of the listed teams is at home
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OddsMarket {
    /// Market type tag; head-to-head is `"h2h"`
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OddsOutcome {
    /// Team display name, matched exactly against the record's teams
    #[serde(default)]
    pub name: String,
    /// American moneyline price
    #[serde(default)]
    pub price: Option<f64>,
}

// =============================================================================
// Merged output
// =============================================================================

/// Head-to-head moneyline prices for one matchup.
///
/// Sides are independently nullable: an unmatched outcome name yields
/// `None` for that side only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Moneyline {
    pub away: Option<f64>,
    pub home: Option<f64>,
}

/// Provenance label for the score totals shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreLabel {
    #[serde(rename = "Score unavailable")]
    Unavailable,
    Estimated,
    Live,
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Score unavailable"),
            Self::Estimated => write!(f, "Estimated"),
            Self::Live => write!(f, "Live"),
        }
    }
}

/// Score block on a merged game.
///
/// Invariant: `away` and `home` are `None` together or `Some` together;
/// the extractor never resolves one side without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBlock {
    pub away: Option<i64>,
    pub home: Option<i64>,
    pub label: ScoreLabel,
}

/// One game on the merged board, combining statistics and odds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedGame {
    pub id: Option<i64>,
    /// Display names keep the original casing from the statistics feed
    pub away_team: String,
    pub home_team: String,
    pub score: ScoreBlock,
    pub status: String,
    pub moneyline: Moneyline,
}

/// Response envelope for the board endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub generated_at: DateTime<Utc>,
    pub games: Vec<MergedGame>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_game_record_tolerates_missing_fields() {
        let game: RawGameRecord = serde_json::from_value(json!({})).unwrap();
        assert!(game.id.is_none());
        assert!(game.teams.away.name.is_none());
        assert!(game.scores.home.is_null());
        assert!(game.status.long.is_none());
    }

    #[test]
    fn test_raw_odds_record_tolerates_missing_fields() {
        let record: RawOddsRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.teams.is_none());
        assert!(record.home_team.is_none());
        assert!(record.bookmakers.is_empty());
    }

    #[test]
    fn test_score_label_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_value(ScoreLabel::Unavailable).unwrap(),
            json!("Score unavailable")
        );
        assert_eq!(
            serde_json::to_value(ScoreLabel::Estimated).unwrap(),
            json!("Estimated")
        );
        assert_eq!(serde_json::to_value(ScoreLabel::Live).unwrap(), json!("Live"));
    }

    #[test]
    fn test_merged_game_serializes_camel_case() {
        let game = MergedGame {
            id: Some(42),
            away_team: "Boston Celtics".to_string(),
            home_team: "Miami Heat".to_string(),
            score: ScoreBlock {
                away: Some(101),
                home: Some(99),
                label: ScoreLabel::Live,
            },
            status: "Game Finished".to_string(),
            moneyline: Moneyline {
                away: Some(150.0),
                home: Some(-170.0),
            },
        };

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["awayTeam"], json!("Boston Celtics"));
        assert_eq!(value["homeTeam"], json!("Miami Heat"));
        assert_eq!(value["score"]["label"], json!("Live"));
        assert_eq!(value["moneyline"]["away"], json!(150.0));
    }
}
