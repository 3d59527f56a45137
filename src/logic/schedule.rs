//! Round-robin schedule generation.

use crate::models::{
    GameMatch, Round, Team, TeamSlot, Tournament, TournamentError, TournamentStatus,
};

/// Generate the complete round-robin fixture for a roster: one match per
/// unordered pair, visited as `{i, j}` with `i < j` in input order.
///
/// Match numbers are assigned 1, 2, 3, … in visitation order; two calls with
/// the same input order number the same pairings identically, which display
/// code relies on. A roster of 0 or 1 teams yields an empty schedule.
pub fn generate_matches(teams: &[Team]) -> Vec<GameMatch> {
    let n = teams.len();
    let mut matches = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    let mut match_number = 1;
    for i in 0..n {
        for j in (i + 1)..n {
            matches.push(GameMatch::new(
                TeamSlot::Filled(teams[i].clone()),
                TeamSlot::Filled(teams[j].clone()),
                Round::Regular,
                match_number,
            ));
            match_number += 1;
        }
    }
    matches
}

/// Generate this tournament's fixture and begin round-robin play.
///
/// Hard error if matches already exist: regenerating would duplicate or
/// orphan fixtures. Requires at least 2 registered teams.
pub fn start_round_robin(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if !tournament.matches.is_empty() {
        return Err(TournamentError::MatchesAlreadyGenerated);
    }
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    tournament.matches = generate_matches(&tournament.teams);
    tournament.status = TournamentStatus::InProgress;
    Ok(())
}
