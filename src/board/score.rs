//! Score total extraction from statistics-provider payloads.
//!
//! Live feeds sometimes drop the running `total` mid-game while still
//! exposing per-period values, so extraction falls back to summing the
//! periods when no direct total is present.

use serde_json::Value;

use super::types::GameScores;

/// Period-score keys summed by the fallback path, in a fixed order.
/// Covers both `quarter_N` and `period_N` naming plus overtime variants.
const PERIOD_KEYS: [&str; 10] = [
    "quarter_1",
    "quarter_2",
    "quarter_3",
    "quarter_4",
    "overtime",
    "ot",
    "period_1",
    "period_2",
    "period_3",
    "period_4",
];

/// Comparable score totals for one game.
///
/// `home` and `away` are always `None` together or `Some` together: the
/// direct-total path requires both sides numeric, and the fallback path
/// requires both sides to have resolved a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTotals {
    pub home: Option<i64>,
    pub away: Option<i64>,
    pub is_estimated: bool,
}

impl ScoreTotals {
    fn unavailable() -> Self {
        Self {
            home: None,
            away: None,
            is_estimated: false,
        }
    }
}

/// Extract comparable totals from a game's score payload.
///
/// Priority order:
/// 1. Both sides expose a numeric `total` -> direct, not estimated.
/// 2. Both sides resolve a period-sum fallback -> estimated.
/// 3. Otherwise both sides are `None`.
pub fn extract_score_totals(scores: &GameScores) -> ScoreTotals {
    let home_total = scores.home.get("total").and_then(Value::as_i64);
    let away_total = scores.away.get("total").and_then(Value::as_i64);

    if let (Some(home), Some(away)) = (home_total, away_total) {
        return ScoreTotals {
            home: Some(home),
            away: Some(away),
            is_estimated: false,
        };
    }

    if let (Some(home), Some(away)) = (
        sum_period_scores(&scores.home),
        sum_period_scores(&scores.away),
    ) {
        return ScoreTotals {
            home: Some(home),
            away: Some(away),
            is_estimated: true,
        };
    }

    ScoreTotals::unavailable()
}

/// Sum the period-score keys of one side.
///
/// Missing or non-numeric keys are skipped. Returns `None` unless at
/// least one key contributed, so a zero sum from real period values is
/// distinguishable from "no period data at all".
fn sum_period_scores(side: &Value) -> Option<i64> {
    let obj = side.as_object()?;

    let mut total = 0;
    let mut found = false;
    for key in PERIOD_KEYS {
        if let Some(value) = obj.get(key).and_then(Value::as_i64) {
            total += value;
            found = true;
        }
    }

    found.then_some(total)
}
