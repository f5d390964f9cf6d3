use nanotox_core::chem::{estimate_formula_volume, resolve_charges, Composition};
use nanotox_core::reference::ReferenceData;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChargeResolutionFixtures {
    resolution_cases: Vec<ResolutionCase>,
    volume_cases: Vec<VolumeCase>,
    failure_cases: Vec<FailureCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolutionCase {
    id: String,
    formula: String,
    classification: String,
    charge_deviation: f64,
    assignments: Vec<AssignmentFixture>,
}

#[derive(Debug, Deserialize)]
struct AssignmentFixture {
    species: String,
    count: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeCase {
    id: String,
    formula: String,
    route: String,
    total_volume_nm3: f64,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FailureCase {
    id: String,
    formula: String,
    expected_code: String,
}

fn load_fixtures() -> ChargeResolutionFixtures {
    let fixture_path = workspace_root().join("tasks/charge-resolution-fixtures.json");
    let source = fs::read_to_string(&fixture_path).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should be readable: {}",
            fixture_path.display(),
            error
        )
    });

    serde_json::from_str(&source).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should parse as JSON: {}",
            fixture_path.display(),
            error
        )
    })
}

fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let abs_diff = (actual - expected).abs();
    let rel_diff = abs_diff / expected.abs().max(1.0);

    assert!(
        abs_diff <= abs_tol || rel_diff <= rel_tol,
        "{} expected={:.15e} actual={:.15e} abs_diff={:.15e} rel_diff={:.15e}",
        label,
        expected,
        actual,
        abs_diff,
        rel_diff
    );
}

#[test]
fn resolution_fixtures_match_reference_assignments() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().resolution_cases {
        let composition = Composition::parse_strict(&case.formula)
            .unwrap_or_else(|error| panic!("{} should parse: {}", case.id, error));
        let resolution = resolve_charges(&case.formula, &composition, &reference)
            .unwrap_or_else(|error| panic!("{} should resolve: {}", case.id, error));

        assert_eq!(
            resolution.classification.to_string(),
            case.classification,
            "{} classification",
            case.id
        );
        assert_eq!(
            resolution.charge_deviation, case.charge_deviation,
            "{} charge deviation",
            case.id
        );

        let actual: Vec<(String, f64)> = resolution
            .assignments
            .iter()
            .map(|assignment| (assignment.species.label(), assignment.count))
            .collect();
        let expected: Vec<(String, f64)> = case
            .assignments
            .iter()
            .map(|assignment| (assignment.species.clone(), assignment.count))
            .collect();
        assert_eq!(actual, expected, "{} assignments", case.id);
    }
}

#[test]
fn volume_fixtures_match_reference_totals() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().volume_cases {
        let volume = estimate_formula_volume(&case.formula, &reference)
            .unwrap_or_else(|error| panic!("{} should estimate: {}", case.id, error));

        assert_eq!(volume.route.to_string(), case.route, "{} route", case.id);
        assert_scalar_close(
            &case.id,
            case.total_volume_nm3,
            volume.total_nm3,
            case.abs_tol,
            case.rel_tol,
        );
    }
}

#[test]
fn failure_fixtures_raise_the_expected_codes() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().failure_cases {
        let error = estimate_formula_volume(&case.formula, &reference)
            .err()
            .unwrap_or_else(|| panic!("{} should fail", case.id));
        assert_eq!(
            error.kind().code(),
            case.expected_code,
            "{} error code",
            case.id
        );
    }
}
