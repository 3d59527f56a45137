//! Standings: full recomputation of team aggregates from the match set.

use crate::models::{GameMatch, Round, Team, TeamId, TeamSlot, Tournament};
use std::collections::HashMap;

/// Recompute every referenced team's aggregates from scratch.
///
/// Discovery walks both slots of every match (TBD slots contribute nothing)
/// and starts each team at zero, so the result depends only on the match set:
/// applying score submissions in any order, or recomputing twice, yields
/// identical aggregates. Teams with no completed matches stay all-zero.
///
/// As part of the same pass, completed matches get their `winner` and
/// `point_difference` back-filled when unset. That is a derivation from the
/// scores, not new information; a level score pair leaves both unset.
pub fn compute_standings(matches: &mut [GameMatch]) -> Vec<Team> {
    let mut order: Vec<TeamId> = Vec::new();
    let mut table: HashMap<TeamId, Team> = HashMap::new();

    for m in matches.iter() {
        for slot in &m.slots {
            if let TeamSlot::Filled(team) = slot {
                if !table.contains_key(&team.id) {
                    order.push(team.id);
                    table.insert(team.id, team.with_cleared_record());
                }
            }
        }
    }

    for m in matches.iter_mut() {
        if m.round != Round::Regular || !m.is_completed {
            continue;
        }
        let (Some(home), Some(away)) = (m.slots[0].team(), m.slots[1].team()) else {
            continue;
        };
        let (Some(home_score), Some(away_score)) = (m.scores[0], m.scores[1]) else {
            continue;
        };
        let (home_id, away_id) = (home.id, away.id);
        let decided = m.decide((home_score, away_score));

        if m.winner.is_none() {
            if let Some((winner_id, margin)) = decided {
                m.winner = Some(winner_id);
                m.point_difference = Some(margin);
            }
        }

        if let Some(t) = table.get_mut(&home_id) {
            t.matches_played += 1;
            t.points += home_score;
        }
        if let Some(t) = table.get_mut(&away_id) {
            t.matches_played += 1;
            t.points += away_score;
        }
        if let Some((winner_id, margin)) = decided {
            if let Some(t) = table.get_mut(&winner_id) {
                t.wins += 1;
                t.lead_points += margin;
            }
        }
    }

    order.into_iter().filter_map(|id| table.remove(&id)).collect()
}

/// Recompute standings for a tournament and write them back onto its roster
/// wholesale. Returns the computed records in discovery order.
pub fn refresh_standings(tournament: &mut Tournament) -> Vec<Team> {
    let standings = compute_standings(&mut tournament.matches);
    for computed in &standings {
        if let Some(team) = tournament.teams.iter_mut().find(|t| t.id == computed.id) {
            team.set_record(computed);
        }
    }
    standings
}
