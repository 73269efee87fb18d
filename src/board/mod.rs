//! Board assembly: provider discovery, normalization and the merge join.
//!
//! The two upstream feeds disagree on team naming and payload shape, so
//! everything funnels through one normalized `away@home` matchup key.
//!
//! - **apisports**: live game discovery via the statistics provider
//! - **oddsapi**: odds discovery, the matchup index and moneyline extraction
//! - **normalize**: canonicalizes team names and builds matchup keys
//! - **score**: derives comparable score totals from provider payloads
//! - **merge**: joins both sources into the merged board
//! - **types**: raw provider records and the merged output model

pub mod apisports;
pub mod merge;
pub mod normalize;
pub mod oddsapi;
pub mod score;
pub mod types;

pub use apisports::fetch_live_games;
pub use merge::{build_board, merge_games};
pub use normalize::{matchup_key, normalize_team_name, NormalizationConfig};
pub use oddsapi::{build_odds_index, extract_moneyline, fetch_odds};
pub use score::{extract_score_totals, ScoreTotals};
pub use types::*;
