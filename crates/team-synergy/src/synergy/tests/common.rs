use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::config::EngineConfig;
use crate::synergy::directory::{
    DirectoryError, OrganizationId, TeamDirectory, TeamId, TeamRecord,
};
use crate::synergy::domain::{CulturalProfile, PersonalityType, TeamMember};
use crate::synergy::model::tables::{CompatibilityRow, TYPE_COLUMNS};
use crate::synergy::model::CompatibilityModel;
use crate::synergy::service::TeamSynergyService;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn code(raw: &str) -> PersonalityType {
    raw.parse().expect("valid type code")
}

pub(super) fn member(id: &str, type_code: &str) -> TeamMember {
    TeamMember::new(id, format!("Member {id}"), code(type_code))
}

pub(super) fn roster(codes: &[&str]) -> Vec<TeamMember> {
    codes
        .iter()
        .enumerate()
        .map(|(index, type_code)| member(&format!("m-{index}"), type_code))
        .collect()
}

pub(super) fn with_profile(member: TeamMember, profile: CulturalProfile) -> TeamMember {
    member.with_cultural_profile(profile)
}

/// V1 and E1 rows only; V1->E1 is 0.2 while E1->V1 is 0.6.
#[rustfmt::skip]
static ASYMMETRIC_ROWS: [CompatibilityRow; 2] = [
    //      V1   V2   V3   I1   I2   I3   E1   E2   E3   C1   C2   C3
    ("V1", [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.2, 0.5, 0.5, 0.5, 0.5, 0.5]),
    ("E1", [0.6, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]),
];

pub(super) static ASYMMETRIC_MODEL: CompatibilityModel =
    CompatibilityModel::with_compatibility("test-asymmetric", &TYPE_COLUMNS, &ASYMMETRIC_ROWS);

pub(super) const ORG: &str = "org-1";

/// Team "core" holds V1/V2/V1; team "balanced" holds V1/I2/E3/C1; team
/// "empty" has no members. The organization pool adds I1, E1, C2 and V3.
pub(super) fn seeded_directory() -> MemoryDirectory {
    let directory = MemoryDirectory::default();
    directory.insert_team(team_record(
        "core",
        vec![member("p-1", "V1"), member("p-2", "V2"), member("p-3", "V1")],
    ));
    directory.insert_team(team_record(
        "balanced",
        vec![
            member("p-1", "V1"),
            member("p-4", "I2"),
            member("p-5", "E3"),
            member("p-6", "C1"),
        ],
    ));
    directory.insert_team(team_record("empty", Vec::new()));

    for person in [
        member("p-1", "V1"),
        member("p-2", "V2"),
        member("p-3", "V1"),
        member("c-i1", "I1"),
        member("c-e1", "E1"),
        member("c-c2", "C2"),
        member("c-v3", "V3"),
    ] {
        directory.insert_person(ORG, person);
    }

    directory
}

pub(super) fn team_record(id: &str, members: Vec<TeamMember>) -> TeamRecord {
    TeamRecord {
        id: TeamId(id.to_string()),
        organization_id: OrganizationId(ORG.to_string()),
        name: format!("Team {id}"),
        members,
    }
}

pub(super) fn build_service(
    directory: MemoryDirectory,
) -> (TeamSynergyService<MemoryDirectory>, Arc<MemoryDirectory>) {
    let directory = Arc::new(directory);
    let service = TeamSynergyService::new(directory.clone(), EngineConfig::default());
    (service, directory)
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    teams: Arc<Mutex<BTreeMap<TeamId, TeamRecord>>>,
    people: Arc<Mutex<BTreeMap<OrganizationId, Vec<TeamMember>>>>,
}

impl MemoryDirectory {
    pub(super) fn insert_team(&self, team: TeamRecord) {
        self.teams
            .lock()
            .expect("directory mutex poisoned")
            .insert(team.id.clone(), team);
    }

    pub(super) fn insert_person(&self, organization: &str, person: TeamMember) {
        self.people
            .lock()
            .expect("directory mutex poisoned")
            .entry(OrganizationId(organization.to_string()))
            .or_default()
            .push(person);
    }
}

impl TeamDirectory for MemoryDirectory {
    fn team(&self, id: &TeamId) -> Result<Option<TeamRecord>, DirectoryError> {
        let guard = self.teams.lock().expect("directory mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn candidates_for(&self, team: &TeamRecord) -> Result<Vec<TeamMember>, DirectoryError> {
        let guard = self.people.lock().expect("directory mutex poisoned");
        Ok(guard
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

pub(super) struct UnavailableDirectory;

impl TeamDirectory for UnavailableDirectory {
    fn team(&self, _id: &TeamId) -> Result<Option<TeamRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("connection refused".to_string()))
    }

    fn candidates_for(&self, _team: &TeamRecord) -> Result<Vec<TeamMember>, DirectoryError> {
        Err(DirectoryError::Unavailable("connection refused".to_string()))
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn assert_error_response(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert!(body["error"].is_string(), "missing error field: {body}");
    body
}
