use nanotox_core::domain::{FailureMode, ParticleRecord};
use nanotox_core::pipeline::{
    element_amounts, evaluate_batch, evaluate_record, log_scaled, record_fingerprint,
};
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
struct PipelineFixtures {
    record_cases: Vec<RecordCase>,
    failure_cases: Vec<PipelineFailureCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordCase {
    id: String,
    record: ParticleRecord,
    descriptors: ExpectedDescriptors,
    element_amounts: Vec<(String, f64)>,
    fingerprint: Vec<f64>,
    fingerprint_log10: Vec<f64>,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedDescriptors {
    particle_volume_nm3: f64,
    particle_surface_area_nm2: f64,
    core_volume_nm3: f64,
    doping_volumes_nm3: Vec<f64>,
    shell_volume_nm3: f64,
    coating_volume_nm3: f64,
    core_amount: f64,
    doping_amounts: Vec<f64>,
    shell_amount: f64,
    coating_amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipelineFailureCase {
    id: String,
    record: ParticleRecord,
    expected_code: String,
    expected_role: String,
}

fn load_fixtures() -> PipelineFixtures {
    let fixture_path = workspace_root().join("tasks/particle-pipeline-fixtures.json");
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

fn assert_vector_close(label: &str, expected: &[f64], actual: &[f64], abs_tol: f64, rel_tol: f64) {
    assert_eq!(expected.len(), actual.len(), "{} length", label);
    for (position, (expected, actual)) in expected.iter().zip(actual).enumerate() {
        assert_scalar_close(
            &format!("{label}[{position}]"),
            *expected,
            *actual,
            abs_tol,
            rel_tol,
        );
    }
}

#[test]
fn record_fixtures_match_descriptor_outputs() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().record_cases {
        let descriptors = evaluate_record(&case.record, &reference)
            .unwrap_or_else(|error| panic!("{} should evaluate: {}", case.id, error));
        let expected = &case.descriptors;

        assert_scalar_close(
            &format!("{}.particleVolume", case.id),
            expected.particle_volume_nm3,
            descriptors.particle_volume_nm3,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.particleSurfaceArea", case.id),
            expected.particle_surface_area_nm2,
            descriptors.particle_surface_area_nm2,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.coreVolume", case.id),
            expected.core_volume_nm3,
            descriptors.core_volume_nm3,
            case.abs_tol,
            case.rel_tol,
        );
        assert_vector_close(
            &format!("{}.dopingVolumes", case.id),
            &expected.doping_volumes_nm3,
            &descriptors.doping_volumes_nm3,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.shellVolume", case.id),
            expected.shell_volume_nm3,
            descriptors.shell_volume_nm3,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.coatingVolume", case.id),
            expected.coating_volume_nm3,
            descriptors.coating_volume_nm3,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.coreAmount", case.id),
            expected.core_amount,
            descriptors.core_amount,
            case.abs_tol,
            case.rel_tol,
        );
        assert_vector_close(
            &format!("{}.dopingAmounts", case.id),
            &expected.doping_amounts,
            &descriptors.doping_amounts,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.shellAmount", case.id),
            expected.shell_amount,
            descriptors.shell_amount,
            case.abs_tol,
            case.rel_tol,
        );
        assert_scalar_close(
            &format!("{}.coatingAmount", case.id),
            expected.coating_amount,
            descriptors.coating_amount,
            case.abs_tol,
            case.rel_tol,
        );
    }
}

#[test]
fn record_fixtures_match_element_amounts_and_fingerprints() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().record_cases {
        let descriptors = evaluate_record(&case.record, &reference)
            .unwrap_or_else(|error| panic!("{} should evaluate: {}", case.id, error));

        let amounts = element_amounts(&case.record, &descriptors, &reference);
        let actual_symbols: Vec<&str> = amounts.iter().map(|(symbol, _)| symbol.as_str()).collect();
        let expected_symbols: Vec<&str> = case
            .element_amounts
            .iter()
            .map(|(symbol, _)| symbol.as_str())
            .collect();
        assert_eq!(actual_symbols, expected_symbols, "{} element order", case.id);
        for ((symbol, expected), (_, actual)) in case.element_amounts.iter().zip(&amounts) {
            assert_scalar_close(
                &format!("{}.amount[{symbol}]", case.id),
                *expected,
                *actual,
                case.abs_tol,
                case.rel_tol,
            );
        }

        let fingerprint = record_fingerprint(&case.record, &descriptors, &reference);
        assert_vector_close(
            &format!("{}.fingerprint", case.id),
            &case.fingerprint,
            &fingerprint,
            case.abs_tol,
            case.rel_tol,
        );

        let scaled = log_scaled(&fingerprint);
        assert_vector_close(
            &format!("{}.fingerprintLog10", case.id),
            &case.fingerprint_log10,
            &scaled,
            case.abs_tol,
            case.rel_tol,
        );
    }
}

#[test]
fn failure_fixtures_raise_role_tagged_errors() {
    let reference = ReferenceData::builtin();

    for case in load_fixtures().failure_cases {
        let error = evaluate_record(&case.record, &reference)
            .err()
            .unwrap_or_else(|| panic!("{} should fail", case.id));
        assert_eq!(
            error.kind().code(),
            case.expected_code,
            "{} error code",
            case.id
        );
        let role = error
            .role()
            .unwrap_or_else(|| panic!("{} should carry a role", case.id));
        assert_eq!(role.as_str(), case.expected_role, "{} role", case.id);
    }
}

#[test]
fn batch_modes_differ_on_failing_records() {
    let reference = ReferenceData::builtin();
    let fixtures = load_fixtures();
    let failing = fixtures.failure_cases[0].record.clone();
    let records = vec![
        fixtures.record_cases[0].record.clone(),
        failing,
        fixtures.record_cases[1].record.clone(),
    ];

    let error = evaluate_batch(&records, &reference, FailureMode::AbortBatch)
        .err()
        .expect("abort mode should surface the failure");
    assert_eq!(
        error.kind().code(),
        fixtures.failure_cases[0].expected_code,
        "abort mode error code"
    );

    let batch = evaluate_batch(&records, &reference, FailureMode::SkipAndReport)
        .expect("skip mode should complete");
    assert_eq!(batch.successes().count(), 2);
    let failed_indices: Vec<usize> = batch.failures().map(|(index, _)| index).collect();
    assert_eq!(failed_indices, vec![1]);
}
