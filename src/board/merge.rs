//! Board assembly: concurrent provider fetches joined into one feed.
//!
//! Each request fetches both providers, builds the odds index from
//! scratch, and maps every statistics game through the join. Nothing is
//! cached or shared across requests.

use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::config::AppConfig;

use super::apisports::fetch_live_games;
use super::normalize::{matchup_key, NormalizationConfig};
use super::oddsapi::{build_odds_index, extract_moneyline, fetch_odds};
use super::score::{extract_score_totals, ScoreTotals};
use super::types::{
    BoardResponse, MergedGame, Moneyline, RawGameRecord, RawOddsRecord, ScoreBlock, ScoreLabel,
};

/// Build the full merged board for the current moment.
///
/// Both providers are fetched concurrently and joined before merging;
/// failure of either fetch fails the request as a unit. Missing
/// credentials degrade to empty lists inside the fetchers, so a
/// partially configured deployment still serves.
pub async fn build_board(
    http: &reqwest::Client,
    config: &AppConfig,
    normalization: &NormalizationConfig,
) -> Result<BoardResponse> {
    let (games, odds) = tokio::try_join!(
        fetch_live_games(http, config),
        fetch_odds(http, config)
    )?;

    Ok(merge_games(&games, &odds, normalization))
}

/// Join statistics games against odds records. Pure, no I/O.
pub fn merge_games(
    games: &[RawGameRecord],
    odds: &[RawOddsRecord],
    normalization: &NormalizationConfig,
) -> BoardResponse {
    let index = build_odds_index(odds, normalization);

    let merged: Vec<MergedGame> = games
        .iter()
        .map(|game| merge_game(game, &index, normalization))
        .collect();

    info!(
        "Merged board: {} games against {} indexed odds records",
        merged.len(),
        index.len()
    );

    BoardResponse {
        generated_at: Utc::now(),
        games: merged,
    }
}

fn merge_game(
    game: &RawGameRecord,
    index: &HashMap<String, &RawOddsRecord>,
    normalization: &NormalizationConfig,
) -> MergedGame {
    let away_team = game.teams.away.name.clone().unwrap_or_default();
    let home_team = game.teams.home.name.clone().unwrap_or_default();
    let key = matchup_key(&away_team, &home_team, normalization);

    let moneyline = match index.get(key.as_str()) {
        Some(record) => extract_moneyline(record),
        None => {
            debug!("No odds record for matchup {}", key);
            Moneyline::default()
        }
    };

    let totals = extract_score_totals(&game.scores);

    MergedGame {
        id: game.id,
        away_team,
        home_team,
        score: ScoreBlock {
            away: totals.away,
            home: totals.home,
            label: score_label(&totals),
        },
        status: game.status.long.clone().unwrap_or_default(),
        moneyline,
    }
}

/// Derive the display label for a score block
fn score_label(totals: &ScoreTotals) -> ScoreLabel {
    match (totals.home, totals.away) {
        (Some(_), Some(_)) if totals.is_estimated => ScoreLabel::Estimated,
        (Some(_), Some(_)) => ScoreLabel::Live,
        _ => ScoreLabel::Unavailable,
    }
}
