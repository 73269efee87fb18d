//! Courtside: a live NBA board service.
//!
//! Aggregates live game data from API-Sports and head-to-head moneyline
//! odds from The Odds API, joins the two feeds on a normalized team-name
//! matchup key, and serves the merged board as JSON alongside a small
//! static front page.

pub mod board;
pub mod config;
pub mod logging;
pub mod server;
