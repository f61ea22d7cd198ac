use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use team_synergy::error::AppError;
use team_synergy::synergy::{
    CultureDimension, CulturalProfile, DirectoryError, OrganizationId, TeamDirectory, TeamId,
    TeamMember, TeamRecord,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only directory over a fixed set of teams and organization members.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTeamDirectory {
    teams: BTreeMap<TeamId, TeamRecord>,
    people: BTreeMap<OrganizationId, Vec<TeamMember>>,
}

impl InMemoryTeamDirectory {
    pub(crate) fn with_team(mut self, team: TeamRecord) -> Self {
        self.teams.insert(team.id.clone(), team);
        self
    }

    pub(crate) fn with_person(mut self, organization: &OrganizationId, person: TeamMember) -> Self {
        self.people
            .entry(organization.clone())
            .or_default()
            .push(person);
        self
    }

    pub(crate) fn teams(&self) -> impl Iterator<Item = &TeamRecord> {
        self.teams.values()
    }
}

impl TeamDirectory for InMemoryTeamDirectory {
    fn team(&self, id: &TeamId) -> Result<Option<TeamRecord>, DirectoryError> {
        Ok(self.teams.get(id).cloned())
    }

    fn candidates_for(&self, team: &TeamRecord) -> Result<Vec<TeamMember>, DirectoryError> {
        Ok(self
            .people
            .get(&team.organization_id)
            .map(|people| {
                people
                    .iter()
                    .filter(|person| !team.has_member(person))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

const SAMPLE_PEOPLE: [(&str, &str, &str, u32); 10] = [
    ("u-01", "Lena Vogt", "V1", 12),
    ("u-02", "Jonas Brandt", "V2", 7),
    ("u-03", "Mira Kessler", "V1", 4),
    ("u-04", "Tobias Hahn", "I1", 6),
    ("u-05", "Sara Lind", "I3", 3),
    ("u-06", "Paul Richter", "E1", 9),
    ("u-07", "Nora Weiss", "E2", 15),
    ("u-08", "Felix Maier", "C2", 5),
    ("u-09", "Anja Roth", "C3", 8),
    ("u-10", "David Krause", "V3", 2),
];

/// Organization "acme" with a leadership-heavy team and a delivery team.
pub(crate) fn sample_directory() -> InMemoryTeamDirectory {
    let organization = OrganizationId("acme".to_string());
    let people: Vec<TeamMember> = SAMPLE_PEOPLE
        .iter()
        .enumerate()
        .filter_map(|(index, (id, name, code, years))| {
            let type_code = code.parse().ok()?;
            let member = TeamMember::new(*id, *name, type_code).with_experience(*years);
            Some(member.with_cultural_profile(sample_profile(index)))
        })
        .collect();

    let pick = |ids: &[&str]| -> Vec<TeamMember> {
        people
            .iter()
            .filter(|person| ids.contains(&person.id.0.as_str()))
            .cloned()
            .collect()
    };

    let mut directory = InMemoryTeamDirectory::default()
        .with_team(TeamRecord {
            id: TeamId("strategy".to_string()),
            organization_id: organization.clone(),
            name: "Strategy Cell".to_string(),
            members: pick(&["u-01", "u-02", "u-03"]),
        })
        .with_team(TeamRecord {
            id: TeamId("delivery".to_string()),
            organization_id: organization.clone(),
            name: "Delivery Squad".to_string(),
            members: pick(&["u-04", "u-06", "u-07", "u-08", "u-10"]),
        });

    for person in people {
        directory = directory.with_person(&organization, person);
    }
    directory
}

fn sample_profile(seed: usize) -> CulturalProfile {
    CultureDimension::ordered()
        .into_iter()
        .enumerate()
        .map(|(offset, dimension)| {
            let value = ((seed * 3 + offset * 2) % 7) as f64 + 2.0;
            (dimension, value)
        })
        .collect()
}

/// Reads a JSON array of members from disk.
pub(crate) fn read_members(path: &Path) -> Result<Vec<TeamMember>, AppError> {
    let raw = fs::read_to_string(path)?;
    let members = serde_json::from_str(&raw)?;
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_directory_excludes_current_members_from_candidates() {
        let directory = sample_directory();
        let team = directory
            .team(&TeamId("strategy".to_string()))
            .expect("directory available")
            .expect("strategy team seeded");
        assert_eq!(team.members.len(), 3);

        let candidates = directory.candidates_for(&team).expect("candidates load");
        assert_eq!(candidates.len(), 7);
        assert!(candidates.iter().all(|person| !team.has_member(person)));
    }

    #[test]
    fn unknown_team_is_none() {
        let directory = sample_directory();
        assert!(directory
            .team(&TeamId("missing".to_string()))
            .expect("directory available")
            .is_none());
    }

    #[test]
    fn read_members_reports_bad_codes() {
        let path = std::env::temp_dir().join("team-synergy-bad-roster.json");
        fs::write(&path, r#"[{"id":"a","name":"Ada","type_code":"Z1"}]"#).expect("write roster");
        let err = read_members(&path).expect_err("roster rejected");
        assert!(matches!(err, AppError::Roster(_)));
        let _ = fs::remove_file(&path);
    }
}
