use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::TeamMember;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub String);

/// A persisted team and its current members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub organization_id: OrganizationId,
    pub name: String,
    pub members: Vec<TeamMember>,
}

impl TeamRecord {
    pub fn has_member(&self, member: &TeamMember) -> bool {
        self.members.iter().any(|existing| existing.id == member.id)
    }
}

/// Read access to teams and the people who could join them.
pub trait TeamDirectory: Send + Sync {
    fn team(&self, id: &TeamId) -> Result<Option<TeamRecord>, DirectoryError>;

    /// People in the team's organization who are not already on the team.
    fn candidates_for(&self, team: &TeamRecord) -> Result<Vec<TeamMember>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("team directory unavailable: {0}")]
    Unavailable(String),
}
