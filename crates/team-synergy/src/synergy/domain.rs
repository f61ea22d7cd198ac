use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::model::tables::TYPE_NAMES;

/// One of the four Hugo personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "V")]
    Vision,
    #[serde(rename = "I")]
    Innovation,
    #[serde(rename = "E")]
    Expertise,
    #[serde(rename = "C")]
    Connection,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Vision,
            Self::Innovation,
            Self::Expertise,
            Self::Connection,
        ]
    }

    pub const fn code(self) -> char {
        match self {
            Self::Vision => 'V',
            Self::Innovation => 'I',
            Self::Expertise => 'E',
            Self::Connection => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vision => "Vision",
            Self::Innovation => "Innovation",
            Self::Expertise => "Expertise",
            Self::Connection => "Connection",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'V' => Some(Self::Vision),
            'I' => Some(Self::Innovation),
            'E' => Some(Self::Expertise),
            'C' => Some(Self::Connection),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Vision => 0,
            Self::Innovation => 1,
            Self::Expertise => 2,
            Self::Connection => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

const TYPE_CODES: [[&str; 3]; 4] = [
    ["V1", "V2", "V3"],
    ["I1", "I2", "I3"],
    ["E1", "E2", "E3"],
    ["C1", "C2", "C3"],
];

/// A Hugo type: a dimension plus a level between 1 and 3.
///
/// Values can only be built through [`PersonalityType::new`] or by parsing a
/// code such as `"V1"`, so every instance is one of the twelve known types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonalityType {
    dimension: Dimension,
    level: u8,
}

impl PersonalityType {
    pub fn new(dimension: Dimension, level: u8) -> Result<Self, TypeCodeError> {
        if !(1..=3).contains(&level) {
            return Err(TypeCodeError::InvalidLevel(level));
        }
        Ok(Self { dimension, level })
    }

    /// All twelve types in canonical order (V1..V3, I1..I3, E1..E3, C1..C3).
    pub fn all() -> impl Iterator<Item = Self> {
        Dimension::ordered()
            .into_iter()
            .flat_map(|dimension| (1..=3).map(move |level| Self { dimension, level }))
    }

    pub const fn dimension(self) -> Dimension {
        self.dimension
    }

    pub const fn level(self) -> u8 {
        self.level
    }

    pub const fn code(self) -> &'static str {
        TYPE_CODES[self.dimension.index()][(self.level - 1) as usize]
    }

    pub const fn display_name(self) -> &'static str {
        TYPE_NAMES[self.dimension.index() * 3 + (self.level - 1) as usize]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = TypeCodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let (Some(dimension), Some(level), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(if trimmed.is_empty() {
                TypeCodeError::Empty
            } else {
                TypeCodeError::Malformed(trimmed.to_string())
            });
        };

        let dimension =
            Dimension::from_code(dimension).ok_or(TypeCodeError::UnknownDimension(dimension))?;
        let level = level
            .to_digit(10)
            .ok_or_else(|| TypeCodeError::Malformed(trimmed.to_string()))?;

        Self::new(dimension, level as u8)
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PersonalityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Rejection raised when a type code does not match `[VIEC][123]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeCodeError {
    #[error("type code must not be empty")]
    Empty,
    #[error("type code '{0}' must be a dimension letter followed by a level, e.g. V1")]
    Malformed(String),
    #[error("unknown dimension '{0}'; expected one of V, I, E, C")]
    UnknownDimension(char),
    #[error("level {0} is out of range; expected 1, 2 or 3")]
    InvalidLevel(u8),
}

/// Opaque identifier supplied by the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workplace-culture axes captured on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureDimension {
    Communication,
    Feedback,
    Leading,
    Deciding,
    Trusting,
    Disagreeing,
    Scheduling,
}

impl CultureDimension {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Communication,
            Self::Feedback,
            Self::Leading,
            Self::Deciding,
            Self::Trusting,
            Self::Disagreeing,
            Self::Scheduling,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Feedback => "feedback",
            Self::Leading => "leading",
            Self::Deciding => "deciding",
            Self::Trusting => "trusting",
            Self::Disagreeing => "disagreeing",
            Self::Scheduling => "scheduling",
        }
    }
}

/// Per-member position on each culture dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalProfile(BTreeMap<CultureDimension, f64>);

impl CulturalProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: CultureDimension, value: f64) -> Self {
        self.0.insert(dimension, value);
        self
    }

    pub fn get(&self, dimension: CultureDimension) -> Option<f64> {
        self.0.get(&dimension).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CultureDimension, f64)> for CulturalProfile {
    fn from_iter<T: IntoIterator<Item = (CultureDimension, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A person as seen by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub type_code: PersonalityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_profile: Option<CulturalProfile>,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>, type_code: PersonalityType) -> Self {
        Self {
            id: MemberId(id.into()),
            name: name.into(),
            type_code,
            experience_years: None,
            cultural_profile: None,
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }

    pub fn with_cultural_profile(mut self, profile: CulturalProfile) -> Self {
        self.cultural_profile = Some(profile);
        self
    }

    pub fn dimension(&self) -> Dimension {
        self.type_code.dimension()
    }

    /// An empty profile map counts as no profile at all.
    pub fn populated_profile(&self) -> Option<&CulturalProfile> {
        self.cultural_profile
            .as_ref()
            .filter(|profile| !profile.is_empty())
    }
}

/// Kind of project a team is assembled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ProjectType {
    Innovation,
    Execution,
    ClientFacing,
    Strategic,
    Research,
    #[default]
    Balanced,
}

impl ProjectType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Innovation,
            Self::Execution,
            Self::ClientFacing,
            Self::Strategic,
            Self::Research,
            Self::Balanced,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Innovation => "innovation",
            Self::Execution => "execution",
            Self::ClientFacing => "client_facing",
            Self::Strategic => "strategic",
            Self::Research => "research",
            Self::Balanced => "balanced",
        }
    }

    /// Strict lookup; `None` for labels outside the six known project types.
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|project| project.label().eq_ignore_ascii_case(label))
    }

    /// Lenient lookup; unknown labels resolve to [`ProjectType::Balanced`].
    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }
}

impl From<String> for ProjectType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// Headcount bracket used for the team-size factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

/// Optimal headcount bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, size: usize) -> bool {
        self.min <= size && size <= self.max
    }
}

/// Share of a team (or of an ideal profile) held by each dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionShares([f64; 4]);

impl DimensionShares {
    pub const fn new(vision: f64, innovation: f64, expertise: f64, connection: f64) -> Self {
        Self([vision, innovation, expertise, connection])
    }

    /// Member count per dimension divided by team size; all zero for an empty team.
    pub fn of_team(members: &[TeamMember]) -> Self {
        if members.is_empty() {
            return Self::default();
        }

        let mut counts = [0usize; 4];
        for member in members {
            counts[member.dimension().index()] += 1;
        }

        let total = members.len() as f64;
        Self(counts.map(|count| count as f64 / total))
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ordered()
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// First dimension holding the largest share, in V, I, E, C order.
    pub fn dominant(&self) -> (Dimension, f64) {
        self.iter()
            .fold((Dimension::Vision, self.get(Dimension::Vision)), |best, entry| {
                if entry.1 > best.1 {
                    entry
                } else {
                    best
                }
            })
    }
}

impl Serialize for DimensionShares {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        for (dimension, share) in self.iter() {
            map.serialize_entry(&dimension, &share)?;
        }
        map.end()
    }
}
