pub(crate) mod tables;

pub use tables::{NEUTRAL_COMPATIBILITY, TABLE_VERSION};

use super::domain::{DimensionShares, PersonalityType, ProjectType, SizeCategory, SizeRange};
use serde::Serialize;
use tables::{CompatibilityRow, COMPATIBILITY_ROWS, PROJECT_PROFILES, SIZE_RANGES, TYPE_COLUMNS};

static STANDARD_MODEL: CompatibilityModel = CompatibilityModel {
    version: TABLE_VERSION,
    columns: &TYPE_COLUMNS,
    rows: &COMPATIBILITY_ROWS,
    profiles: &PROJECT_PROFILES,
    sizes: &SIZE_RANGES,
};

/// Immutable lookup tables backing every score.
#[derive(Debug)]
pub struct CompatibilityModel {
    version: &'static str,
    columns: &'static [&'static str],
    rows: &'static [CompatibilityRow],
    profiles: &'static [(ProjectType, DimensionShares)],
    sizes: &'static [(SizeCategory, SizeRange)],
}

/// One directed cell of the compatibility table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub value: f64,
}

impl CompatibilityModel {
    pub fn standard() -> &'static Self {
        &STANDARD_MODEL
    }

    /// Swap in a different compatibility table while keeping the standard
    /// project profiles and size ranges.
    pub const fn with_compatibility(
        version: &'static str,
        columns: &'static [&'static str],
        rows: &'static [CompatibilityRow],
    ) -> Self {
        Self {
            version,
            columns,
            rows,
            profiles: &PROJECT_PROFILES,
            sizes: &SIZE_RANGES,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn compatibility(&self, from: PersonalityType, to: PersonalityType) -> f64 {
        self.compatibility_by_code(from.code(), to.code())
    }

    /// Ordered lookup by raw code; unparseable or absent codes score
    /// [`NEUTRAL_COMPATIBILITY`].
    pub fn compatibility_by_code(&self, from: &str, to: &str) -> f64 {
        let (from, to) = (from.trim(), to.trim());
        let column = self
            .columns
            .iter()
            .position(|code| code.eq_ignore_ascii_case(to));
        let row = self
            .rows
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(from));

        match (row, column) {
            (Some((_, values)), Some(index)) => values
                .get(index)
                .copied()
                .unwrap_or(NEUTRAL_COMPATIBILITY),
            _ => NEUTRAL_COMPATIBILITY,
        }
    }

    /// Every directed cell, row by row.
    pub fn entries(&self) -> impl Iterator<Item = CompatibilityEntry> + '_ {
        let columns = self.columns;
        self.rows.iter().flat_map(move |(from, values)| {
            columns
                .iter()
                .zip(values.iter())
                .map(move |(to, value)| CompatibilityEntry {
                    from: *from,
                    to: *to,
                    value: *value,
                })
        })
    }

    pub fn ideal_profile(&self, project: ProjectType) -> DimensionShares {
        self.profiles
            .iter()
            .find(|(candidate, _)| *candidate == project)
            .or_else(|| {
                self.profiles
                    .iter()
                    .find(|(candidate, _)| *candidate == ProjectType::Balanced)
            })
            .map(|(_, profile)| *profile)
            .unwrap_or(DimensionShares::new(0.25, 0.25, 0.25, 0.25))
    }

    pub fn ideal_profile_for(&self, label: &str) -> DimensionShares {
        self.ideal_profile(ProjectType::from_label(label))
    }

    pub fn size_range(&self, category: SizeCategory) -> SizeRange {
        self.sizes
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, range)| *range)
            .unwrap_or(SizeRange::new(5, 8))
    }
}
