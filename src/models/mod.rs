//! Data structures for the tournament: teams, matches, tournament state.

mod game;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, Round, TeamSlot};
pub use team::{Team, TeamId};
pub use tournament::{Phase, Tournament, TournamentError, TournamentId, TournamentStatus};
