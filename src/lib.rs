//! Round-robin tournament web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    advance_to_final, build_final_match, compute_standings, generate_matches, rank_teams,
    refresh_standings, start_round_robin, submit_score,
};
pub use models::{
    GameMatch, MatchId, Phase, Round, Team, TeamId, TeamSlot, Tournament, TournamentError,
    TournamentId, TournamentStatus,
};
