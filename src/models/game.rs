//! Match, team slot, and round data structures.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Round {
    Regular,
    Final,
}

/// One side of a match: a concrete team, or a slot still waiting to be
/// populated (only legal for the final before round-robin play completes).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSlot {
    Filled(Team),
    Tbd,
}

impl TeamSlot {
    /// The team in this slot, if populated.
    pub fn team(&self) -> Option<&Team> {
        match self {
            TeamSlot::Filled(team) => Some(team),
            TeamSlot::Tbd => None,
        }
    }

    pub fn is_tbd(&self) -> bool {
        matches!(self, TeamSlot::Tbd)
    }
}

/// A single match between two team slots.
///
/// `scores` and `is_completed` transition together, once, from
/// (absent, absent, false) to (present, present, true); a completed match is
/// never reopened. `winner` and `point_difference` are derived from the
/// scores and stay unset when the scores are level.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub slots: [TeamSlot; 2],
    /// None per side until a score is submitted.
    pub scores: [Option<u32>; 2],
    pub is_completed: bool,
    pub round: Round,
    /// Display ordering: 1..K in generation order for regular matches,
    /// always 1 for the final.
    pub match_number: u32,
    pub winner: Option<TeamId>,
    pub point_difference: Option<u32>,
}

impl GameMatch {
    pub fn new(home: TeamSlot, away: TeamSlot, round: Round, match_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            slots: [home, away],
            scores: [None, None],
            is_completed: false,
            round,
            match_number,
            winner: None,
            point_difference: None,
        }
    }

    /// Winning team id and absolute margin for a score pair, or None when level.
    pub fn decide(&self, scores: (u32, u32)) -> Option<(TeamId, u32)> {
        let home = self.slots[0].team()?;
        let away = self.slots[1].team()?;
        match scores {
            (a, b) if a > b => Some((home.id, a - b)),
            (a, b) if b > a => Some((away.id, b - a)),
            _ => None,
        }
    }
}
