//! Score submission: the single mutating entry point, and the two
//! progression triggers it drives (promotion into the final, completion).

use crate::logic::ranking::{build_final_match, rank_teams};
use crate::logic::standings::refresh_standings;
use crate::models::{MatchId, Round, Tournament, TournamentError, TournamentStatus};

/// Submit a score pair for a match.
///
/// Rejected, with no state change, when the match is unknown, already
/// completed, still has a TBD slot, or is a drawn final. On success the
/// scores, completion flag, and derived winner/margin are set together, then
/// the round decides what follows: a regular result refreshes standings and
/// checks the promotion trigger; the final result crowns the champion and
/// completes the tournament.
pub fn submit_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    scores: (u32, u32),
) -> Result<(), TournamentError> {
    let (round, winner) = {
        let m = tournament
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        if m.is_completed {
            return Err(TournamentError::MatchAlreadyCompleted(match_id));
        }
        if m.slots.iter().any(|s| s.is_tbd()) {
            return Err(TournamentError::UnfilledSlot(match_id));
        }
        if m.round == Round::Final && scores.0 == scores.1 {
            return Err(TournamentError::DrawnFinal);
        }

        let decided = m.decide(scores);
        m.scores = [Some(scores.0), Some(scores.1)];
        m.is_completed = true;
        if let Some((winner_id, margin)) = decided {
            m.winner = Some(winner_id);
            m.point_difference = Some(margin);
        }
        (m.round, m.winner)
    };

    match round {
        Round::Regular => {
            refresh_standings(tournament);
            advance_to_final(tournament);
        }
        Round::Final => {
            tournament.champion = winner;
            tournament.status = TournamentStatus::Completed;
        }
    }
    Ok(())
}

/// Create the final once every regular match is scored.
///
/// Idempotent: an existing final makes this a no-op, so duplicate triggering
/// attempts (two submissions both observing "all complete") produce at most
/// one final per tournament. Returns whether a final was created.
pub fn advance_to_final(tournament: &mut Tournament) -> bool {
    if tournament.final_match().is_some() {
        return false;
    }
    if !tournament.round_robin_complete() {
        return false;
    }
    let standings = refresh_standings(tournament);
    let top_teams = rank_teams(&standings, 2);
    let final_match = build_final_match(&top_teams);
    tournament.matches.push(final_match);
    true
}
