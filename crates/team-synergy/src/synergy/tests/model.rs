use super::common::*;

use crate::synergy::domain::{DimensionShares, PersonalityType, ProjectType, SizeCategory};
use crate::synergy::model::{CompatibilityModel, NEUTRAL_COMPATIBILITY, TABLE_VERSION};

const CODES: [&str; 12] = [
    "V1", "V2", "V3", "I1", "I2", "I3", "E1", "E2", "E3", "C1", "C2", "C3",
];

#[rustfmt::skip]
const DOCUMENTED: [[f64; 12]; 12] = [
    [0.80, 0.85, 0.75, 0.90, 0.95, 0.85, 0.70, 0.75, 0.80, 0.85, 0.90, 0.85],
    [0.85, 0.75, 0.70, 0.95, 0.90, 0.85, 0.65, 0.70, 0.75, 0.80, 0.85, 0.80],
    [0.75, 0.70, 0.65, 0.85, 0.90, 0.80, 0.75, 0.80, 0.85, 0.70, 0.75, 0.70],
    [0.90, 0.95, 0.85, 0.85, 0.90, 0.80, 0.75, 0.80, 0.70, 0.90, 0.95, 0.90],
    [0.95, 0.90, 0.90, 0.90, 0.85, 0.80, 0.70, 0.75, 0.80, 0.85, 0.90, 0.85],
    [0.85, 0.85, 0.80, 0.80, 0.80, 0.75, 0.80, 0.85, 0.90, 0.75, 0.80, 0.75],
    [0.70, 0.65, 0.75, 0.75, 0.70, 0.80, 0.85, 0.90, 0.85, 0.80, 0.85, 0.90],
    [0.75, 0.70, 0.80, 0.80, 0.75, 0.85, 0.90, 0.85, 0.90, 0.75, 0.80, 0.85],
    [0.80, 0.75, 0.85, 0.70, 0.80, 0.90, 0.85, 0.90, 0.80, 0.70, 0.75, 0.80],
    [0.85, 0.80, 0.70, 0.90, 0.85, 0.75, 0.80, 0.75, 0.70, 0.90, 0.95, 0.90],
    [0.90, 0.85, 0.75, 0.95, 0.90, 0.80, 0.85, 0.80, 0.75, 0.95, 0.90, 0.95],
    [0.85, 0.80, 0.70, 0.90, 0.85, 0.75, 0.90, 0.85, 0.80, 0.90, 0.95, 0.85],
];

#[test]
fn standard_table_matches_documented_values_cell_by_cell() {
    let model = CompatibilityModel::standard();
    assert_eq!(model.version(), TABLE_VERSION);

    for (row, from) in CODES.iter().enumerate() {
        for (column, to) in CODES.iter().enumerate() {
            assert_eq!(
                model.compatibility(code(from), code(to)),
                DOCUMENTED[row][column],
                "cell {from}->{to}"
            );
        }
    }

    assert_eq!(model.entries().count(), 144);
}

#[test]
fn entries_walk_rows_in_canonical_order() {
    let entries: Vec<_> = CompatibilityModel::standard().entries().take(13).collect();
    assert_eq!((entries[0].from, entries[0].to), ("V1", "V1"));
    assert_eq!((entries[11].from, entries[11].to), ("V1", "C3"));
    assert_eq!((entries[12].from, entries[12].to), ("V2", "V1"));
    assert_eq!(entries[12].value, 0.85);
}

#[test]
fn unknown_codes_score_neutral() {
    let model = CompatibilityModel::standard();
    assert_eq!(model.compatibility_by_code("V1", "X9"), NEUTRAL_COMPATIBILITY);
    assert_eq!(model.compatibility_by_code("", "C1"), NEUTRAL_COMPATIBILITY);
    assert_eq!(model.compatibility_by_code(" v1 ", "i2"), 0.95);
}

#[test]
fn lookup_is_directed() {
    let (v1, e1) = (code("V1"), code("E1"));
    assert_eq!(ASYMMETRIC_MODEL.compatibility(v1, e1), 0.2);
    assert_eq!(ASYMMETRIC_MODEL.compatibility(e1, v1), 0.6);
    // No C1 row in the custom table.
    assert_eq!(
        ASYMMETRIC_MODEL.compatibility(code("C1"), v1),
        NEUTRAL_COMPATIBILITY
    );
}

#[test]
fn project_profiles_and_fallback() {
    let model = CompatibilityModel::standard();
    assert_eq!(
        model.ideal_profile(ProjectType::Strategic),
        DimensionShares::new(0.45, 0.25, 0.20, 0.10)
    );
    assert_eq!(
        model.ideal_profile_for("client_facing"),
        DimensionShares::new(0.20, 0.15, 0.25, 0.40)
    );
    assert_eq!(
        model.ideal_profile_for("unheard-of"),
        DimensionShares::new(0.25, 0.25, 0.25, 0.25)
    );

    for project in ProjectType::ordered() {
        let total: f64 = model.ideal_profile(project).iter().map(|(_, share)| share).sum();
        assert_close(total, 1.0);
    }
}

#[test]
fn size_ranges_per_category() {
    let model = CompatibilityModel::standard();
    let ranges: Vec<(usize, usize)> = SizeCategory::ordered()
        .into_iter()
        .map(|category| {
            let range = model.size_range(category);
            (range.min, range.max)
        })
        .collect();
    assert_eq!(ranges, vec![(3, 5), (5, 8), (8, 12)]);
}

#[test]
fn display_names_follow_type_order() {
    let names: Vec<&str> = PersonalityType::all()
        .map(PersonalityType::display_name)
        .collect();
    assert_eq!(names[0], "Wegweiser");
    assert_eq!(names[4], "Architekt");
    assert_eq!(names[10], "Brückenbauer");
    assert_eq!(names.len(), 12);
}
