//! Team data structure and its standings aggregates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// A registered team.
///
/// Identity fields (`id`, `name`, `members`) never change after creation.
/// The four aggregate fields are owned by the standings calculator: they are
/// replaced wholesale on every recomputation and must never be patched
/// incrementally, so they cannot drift from the match set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Member identifiers in registration order (display order).
    pub members: Vec<String>,
    /// Sum of this team's own scores across completed regular matches.
    pub points: u32,
    /// Regular matches won.
    pub wins: u32,
    /// Regular matches completed.
    pub matches_played: u32,
    /// Cumulative margin of victory across matches won.
    pub lead_points: u32,
}

impl Team {
    /// Create a new team with the given name and members. Aggregates start at zero.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members,
            points: 0,
            wins: 0,
            matches_played: 0,
            lead_points: 0,
        }
    }

    /// Copy of this team with all four aggregates back at zero (the standings
    /// calculator starts every recomputation from this).
    pub fn with_cleared_record(&self) -> Self {
        Self {
            points: 0,
            wins: 0,
            matches_played: 0,
            lead_points: 0,
            ..self.clone()
        }
    }

    /// Replace the aggregate fields from a freshly computed record.
    pub fn set_record(&mut self, computed: &Team) {
        self.points = computed.points;
        self.wins = computed.wins;
        self.matches_played = computed.matches_played;
        self.lead_points = computed.lead_points;
    }
}
