//! Ranking order and promotion into the final.

use crate::models::{GameMatch, Round, Team, TeamSlot};
use std::cmp::Ordering;

/// Tie-break chain, highest priority first: wins, then lead points (decisive
/// victories beat narrow ones), then total points, then fewer matches played.
/// Matches played is the only ascending criterion.
fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.lead_points.cmp(&a.lead_points))
        .then_with(|| b.points.cmp(&a.points))
        .then_with(|| a.matches_played.cmp(&b.matches_played))
}

/// The top `n` teams in ranking order (fewer if the field is smaller).
///
/// The sort is stable, so teams level on all four criteria keep their input
/// order; callers passing teams in registration order get deterministic
/// output.
pub fn rank_teams(standings: &[Team], n: usize) -> Vec<Team> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(compare_teams);
    ranked.truncate(n);
    ranked
}

/// Construct the final from the promoted teams: round `final`, match number 1,
/// no scores. Slots beyond the available teams stay TBD.
pub fn build_final_match(top_teams: &[Team]) -> GameMatch {
    let slot = |i: usize| {
        top_teams
            .get(i)
            .map(|t| TeamSlot::Filled(t.clone()))
            .unwrap_or(TeamSlot::Tbd)
    };
    GameMatch::new(slot(0), slot(1), Round::Final, 1)
}
