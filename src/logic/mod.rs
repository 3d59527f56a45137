//! Tournament engine: scheduling, standings, ranking, score submission.

mod ranking;
mod schedule;
mod scoring;
mod standings;

pub use ranking::{build_final_match, rank_teams};
pub use schedule::{generate_matches, start_round_robin};
pub use scoring::{advance_to_final, submit_score};
pub use standings::{compute_standings, refresh_standings};
