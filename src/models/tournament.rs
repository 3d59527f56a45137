//! Tournament, its status projection, and the internal phase machine.

use crate::models::game::{GameMatch, MatchId, Round};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Team name is empty or whitespace.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// The same member identifier appears twice in one team.
    DuplicateMember(String),
    /// Roster changes are only allowed before matches are generated.
    RosterLocked,
    /// Not enough teams to generate a schedule (need at least 2).
    NotEnoughTeams,
    /// Matches have already been generated for this tournament.
    MatchesAlreadyGenerated,
    /// Team not found in this tournament.
    TeamNotFound(TeamId),
    /// Match not found in this tournament.
    MatchNotFound(MatchId),
    /// Score already submitted for this match.
    MatchAlreadyCompleted(MatchId),
    /// Match has an unfilled (TBD) slot and cannot take a score.
    UnfilledSlot(MatchId),
    /// The final cannot end level; a champion is required.
    DrawnFinal,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyTeamName => write!(f, "Team name must not be empty"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::DuplicateMember(m) => {
                write!(f, "Member '{}' is listed twice in this team", m)
            }
            TournamentError::RosterLocked => {
                write!(f, "Roster cannot change after matches are generated")
            }
            TournamentError::NotEnoughTeams => {
                write!(f, "Need at least 2 teams to generate matches")
            }
            TournamentError::MatchesAlreadyGenerated => {
                write!(f, "Matches have already been generated")
            }
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::MatchAlreadyCompleted(_) => {
                write!(f, "Score already submitted for this match")
            }
            TournamentError::UnfilledSlot(_) => {
                write!(f, "Match is waiting on a team and cannot take a score")
            }
            TournamentError::DrawnFinal => write!(f, "The final cannot end in a draw"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Externally visible status. A coarser projection of [`Phase`]: everything
/// between registration and the scored final reads as pending/in progress.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// No matches generated yet.
    #[default]
    Pending,
    /// Round-robin or final play underway.
    InProgress,
    /// Final scored; champion decided.
    Completed,
}

/// Internal progression of a tournament, derived from its match set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Teams can still join or leave; no matches exist.
    Registering,
    /// Regular matches exist and at least one is unscored.
    RoundRobinInProgress,
    /// All regular matches scored; the final awaits its result.
    FinalPending,
    /// The final is scored.
    Completed,
}

/// Full tournament state: roster, match set, and status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub venue: String,
    pub created_at: DateTime<Utc>,
    pub status: TournamentStatus,
    /// Registered teams in registration order.
    pub teams: Vec<Team>,
    /// Regular matches in generation order, plus the final once promoted.
    pub matches: Vec<GameMatch>,
    /// Winner of the final, once scored.
    pub champion: Option<TeamId>,
}

impl Tournament {
    /// Create a new tournament with an empty roster.
    pub fn new(name: impl Into<String>, venue: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            venue: venue.into(),
            created_at: Utc::now(),
            status: TournamentStatus::Pending,
            teams: Vec::new(),
            matches: Vec::new(),
            champion: None,
        }
    }

    /// Current phase, derived from the match set rather than stored, so it
    /// cannot disagree with the matches it describes.
    pub fn phase(&self) -> Phase {
        if self.matches.is_empty() {
            return Phase::Registering;
        }
        match self.final_match() {
            Some(m) if m.is_completed => Phase::Completed,
            Some(_) => Phase::FinalPending,
            None => Phase::RoundRobinInProgress,
        }
    }

    /// The final match, if it has been created.
    pub fn final_match(&self) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.round == Round::Final)
    }

    /// All regular matches are scored (vacuously false before generation).
    pub fn round_robin_complete(&self) -> bool {
        let mut regular = self.matches.iter().filter(|m| m.round == Round::Regular);
        !self.matches.is_empty() && regular.all(|m| m.is_completed)
    }

    /// Register a team. Names are unique (case-insensitive) and member lists
    /// must not repeat an identifier. Only legal before matches exist.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        members: Vec<String>,
    ) -> Result<(), TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::RosterLocked);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        for (i, member) in members.iter().enumerate() {
            if members[..i].contains(member) {
                return Err(TournamentError::DuplicateMember(member.clone()));
            }
        }
        self.teams.push(Team::new(name_trimmed, members));
        Ok(())
    }

    /// Remove a team by id. Only legal before matches exist.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::RosterLocked);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        Ok(())
    }
}
