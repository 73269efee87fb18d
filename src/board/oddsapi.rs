//! Odds discovery via The Odds API, plus the matchup index and
//! moneyline extraction over the returned records.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::{AppConfig, ODDS_API_URL};

use super::normalize::{matchup_key, NormalizationConfig};
use super::types::{Moneyline, RawOddsRecord};

/// Fetch NBA head-to-head odds from the odds provider.
///
/// A missing credential is not an error: the provider is treated as
/// disabled and every merged game carries a null moneyline. A non-2xx
/// status or unparseable body fails the request.
pub async fn fetch_odds(http: &reqwest::Client, config: &AppConfig) -> Result<Vec<RawOddsRecord>> {
    let Some(key) = &config.odds_api_key else {
        debug!("ODDS_API_KEY not set; skipping odds fetch");
        return Ok(Vec::new());
    };

    let resp = http
        .get(ODDS_API_URL)
        .query(&[
            ("markets", "h2h"),
            ("oddsFormat", "american"),
            ("regions", "us"),
            ("apiKey", key.as_str()),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Odds API error {}: {}", status, body);
    }

    let records: Vec<RawOddsRecord> = resp.json().await?;
    info!("Fetched {} odds records from The Odds API", records.len());

    Ok(records)
}

/// Build a lookup from normalized `away@home` key to odds record.
///
/// The away team is whichever of the two listed names is not the
/// designated home team. Records without exactly two listed teams are
/// silently skipped. Duplicate keys overwrite (last write wins); the
/// source data gives no way to disambiguate.
pub fn build_odds_index<'a>(
    records: &'a [RawOddsRecord],
    config: &NormalizationConfig,
) -> HashMap<String, &'a RawOddsRecord> {
    let mut index = HashMap::new();

    for record in records {
        let Some(teams) = record.teams.as_deref() else {
            continue;
        };
        if teams.len() != 2 {
            continue;
        }

        let home = record.home_team.as_deref().unwrap_or_default();
        let away = if teams[0] == home { &teams[1] } else { &teams[0] };

        index.insert(matchup_key(away, home, config), record);
    }

    index
}

/// Pull the head-to-head moneyline prices out of one odds record.
///
/// Takes the first bookmaker strictly by position and its `h2h` market;
/// no bookmaker or market means both sides are null. Each side is then
/// looked up by exact display-name match in the market's outcomes, so an
/// unmatched side yields null independently.
pub fn extract_moneyline(record: &RawOddsRecord) -> Moneyline {
    let Some(market) = record
        .bookmakers
        .first()
        .and_then(|bookmaker| bookmaker.markets.iter().find(|m| m.key == "h2h"))
    else {
        return Moneyline::default();
    };

    let home = record.home_team.as_deref();
    let away = record
        .teams
        .as_deref()
        .and_then(|teams| teams.iter().find(|team| Some(team.as_str()) != home))
        .map(|team| team.as_str());

    let price_for = |name: Option<&str>| {
        let name = name?;
        market
            .outcomes
            .iter()
            .find(|outcome| outcome.name == name)
            .and_then(|outcome| outcome.price)
    };

    Moneyline {
        away: price_for(away),
        home: price_for(home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn odds_record(value: serde_json::Value) -> RawOddsRecord {
        serde_json::from_value(value).unwrap()
    }

    fn celtics_at_heat() -> RawOddsRecord {
        odds_record(json!({
            "teams": ["Boston Celtics", "Miami Heat"],
            "home_team": "Miami Heat",
            "bookmakers": [
                {
                    "key": "draftkings",
                    "markets": [
                        {
                            "key": "h2h",
                            "outcomes": [
                                {"name": "Boston Celtics", "price": 150},
                                {"name": "Miami Heat", "price": -170}
                            ]
                        }
                    ]
                }
            ]
        }))
    }

    #[test]
    fn test_index_keys_away_at_home() {
        let records = vec![celtics_at_heat()];
        let config = NormalizationConfig::default();

        let index = build_odds_index(&records, &config);
        assert!(index.contains_key("boston celtics@miami heat"));
    }

    #[test]
    fn test_index_handles_home_team_listed_first() {
        let records = vec![odds_record(json!({
            "teams": ["Miami Heat", "Boston Celtics"],
            "home_team": "Miami Heat",
            "bookmakers": []
        }))];
        let config = NormalizationConfig::default();

        let index = build_odds_index(&records, &config);
        assert!(index.contains_key("boston celtics@miami heat"));
    }

    #[test]
    fn test_index_skips_malformed_teams_lists() {
        let records = vec![
            odds_record(json!({"home_team": "Miami Heat"})),
            odds_record(json!({"teams": ["Miami Heat"], "home_team": "Miami Heat"})),
            odds_record(json!({
                "teams": ["A", "B", "C"],
                "home_team": "A"
            })),
        ];
        let config = NormalizationConfig::default();

        let index = build_odds_index(&records, &config);
        assert!(index.is_empty());
    }

    #[test]
    fn test_index_duplicate_keys_last_write_wins() {
        let mut first = celtics_at_heat();
        first.bookmakers.clear();
        let second = celtics_at_heat();
        let records = vec![first, second];
        let config = NormalizationConfig::default();

        let index = build_odds_index(&records, &config);
        let record = index["boston celtics@miami heat"];
        assert_eq!(record.bookmakers.len(), 1);
    }

    #[test]
    fn test_extract_moneyline_both_sides() {
        let ml = extract_moneyline(&celtics_at_heat());
        assert_eq!(ml.away, Some(150.0));
        assert_eq!(ml.home, Some(-170.0));
    }

    #[test]
    fn test_extract_moneyline_no_bookmakers() {
        let mut record = celtics_at_heat();
        record.bookmakers.clear();
        assert_eq!(extract_moneyline(&record), Moneyline::default());
    }

    #[test]
    fn test_extract_moneyline_no_h2h_market() {
        let record = odds_record(json!({
            "teams": ["Boston Celtics", "Miami Heat"],
            "home_team": "Miami Heat",
            "bookmakers": [
                {"key": "draftkings", "markets": [{"key": "spreads", "outcomes": []}]}
            ]
        }));
        assert_eq!(extract_moneyline(&record), Moneyline::default());
    }

    #[test]
    fn test_extract_moneyline_first_bookmaker_only() {
        let record = odds_record(json!({
            "teams": ["Boston Celtics", "Miami Heat"],
            "home_team": "Miami Heat",
            "bookmakers": [
                {"key": "empty_book", "markets": []},
                {
                    "key": "draftkings",
                    "markets": [
                        {
                            "key": "h2h",
                            "outcomes": [
                                {"name": "Boston Celtics", "price": 150},
                                {"name": "Miami Heat", "price": -170}
                            ]
                        }
                    ]
                }
            ]
        }));

        // First bookmaker has no h2h market; selection is strictly
        // positional, so nothing falls through to the second.
        assert_eq!(extract_moneyline(&record), Moneyline::default());
    }

    #[test]
    fn test_extract_moneyline_unmatched_side_is_independent() {
        let record = odds_record(json!({
            "teams": ["Boston Celtics", "Miami Heat"],
            "home_team": "Miami Heat",
            "bookmakers": [
                {
                    "key": "draftkings",
                    "markets": [
                        {
                            "key": "h2h",
                            "outcomes": [
                                {"name": "Miami Heat", "price": -170}
                            ]
                        }
                    ]
                }
            ]
        }));

        let ml = extract_moneyline(&record);
        assert_eq!(ml.away, None);
        assert_eq!(ml.home, Some(-170.0));
    }
}
