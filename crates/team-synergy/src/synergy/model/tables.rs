//! Reference data for the compatibility model.
//!
//! Values are read-only constants. Rows are keyed by the first type of an
//! ordered pair and columns follow [`TYPE_COLUMNS`]; the table is directed and
//! lookups never mirror a cell.

use super::super::domain::{DimensionShares, ProjectType, SizeCategory, SizeRange};

/// Bumped whenever any value below changes.
pub const TABLE_VERSION: &str = "hugo-compat/1";

/// Returned for any pair that is not present in the table.
pub const NEUTRAL_COMPATIBILITY: f64 = 0.75;

pub(crate) type CompatibilityRow = (&'static str, [f64; 12]);

pub(crate) const TYPE_COLUMNS: [&str; 12] = [
    "V1", "V2", "V3", "I1", "I2", "I3", "E1", "E2", "E3", "C1", "C2", "C3",
];

#[rustfmt::skip]
pub(crate) const COMPATIBILITY_ROWS: [CompatibilityRow; 12] = [
    //       V1    V2    V3    I1    I2    I3    E1    E2    E3    C1    C2    C3
    ("V1", [0.80, 0.85, 0.75, 0.90, 0.95, 0.85, 0.70, 0.75, 0.80, 0.85, 0.90, 0.85]),
    ("V2", [0.85, 0.75, 0.70, 0.95, 0.90, 0.85, 0.65, 0.70, 0.75, 0.80, 0.85, 0.80]),
    ("V3", [0.75, 0.70, 0.65, 0.85, 0.90, 0.80, 0.75, 0.80, 0.85, 0.70, 0.75, 0.70]),
    ("I1", [0.90, 0.95, 0.85, 0.85, 0.90, 0.80, 0.75, 0.80, 0.70, 0.90, 0.95, 0.90]),
    ("I2", [0.95, 0.90, 0.90, 0.90, 0.85, 0.80, 0.70, 0.75, 0.80, 0.85, 0.90, 0.85]),
    ("I3", [0.85, 0.85, 0.80, 0.80, 0.80, 0.75, 0.80, 0.85, 0.90, 0.75, 0.80, 0.75]),
    ("E1", [0.70, 0.65, 0.75, 0.75, 0.70, 0.80, 0.85, 0.90, 0.85, 0.80, 0.85, 0.90]),
    ("E2", [0.75, 0.70, 0.80, 0.80, 0.75, 0.85, 0.90, 0.85, 0.90, 0.75, 0.80, 0.85]),
    ("E3", [0.80, 0.75, 0.85, 0.70, 0.80, 0.90, 0.85, 0.90, 0.80, 0.70, 0.75, 0.80]),
    ("C1", [0.85, 0.80, 0.70, 0.90, 0.85, 0.75, 0.80, 0.75, 0.70, 0.90, 0.95, 0.90]),
    ("C2", [0.90, 0.85, 0.75, 0.95, 0.90, 0.80, 0.85, 0.80, 0.75, 0.95, 0.90, 0.95]),
    ("C3", [0.85, 0.80, 0.70, 0.90, 0.85, 0.75, 0.90, 0.85, 0.80, 0.90, 0.95, 0.85]),
];

pub(crate) const PROJECT_PROFILES: [(ProjectType, DimensionShares); 6] = [
    (ProjectType::Innovation, DimensionShares::new(0.25, 0.40, 0.20, 0.15)),
    (ProjectType::Execution, DimensionShares::new(0.15, 0.15, 0.50, 0.20)),
    (ProjectType::ClientFacing, DimensionShares::new(0.20, 0.15, 0.25, 0.40)),
    (ProjectType::Strategic, DimensionShares::new(0.45, 0.25, 0.20, 0.10)),
    (ProjectType::Research, DimensionShares::new(0.20, 0.30, 0.40, 0.10)),
    (ProjectType::Balanced, DimensionShares::new(0.25, 0.25, 0.25, 0.25)),
];

pub(crate) const SIZE_RANGES: [(SizeCategory, SizeRange); 3] = [
    (SizeCategory::Small, SizeRange::new(3, 5)),
    (SizeCategory::Medium, SizeRange::new(5, 8)),
    (SizeCategory::Large, SizeRange::new(8, 12)),
];

/// Display names in [`TYPE_COLUMNS`] order.
pub(crate) const TYPE_NAMES: [&str; 12] = [
    "Wegweiser",
    "Entwickler",
    "Organisator",
    "Pionier",
    "Architekt",
    "Inspirator",
    "Forscher",
    "Meister",
    "Berater",
    "Harmonizer",
    "Brückenbauer",
    "Umsetzer",
];
