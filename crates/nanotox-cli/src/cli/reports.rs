use nanotox_core::chem::FormulaVolume;
use nanotox_core::domain::{BatchOutcome, ParticleRecord, RecordDescriptors};
use serde::Serialize;

/// JSON shape of the `resolve` command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FormulaReport {
    pub(super) formula: String,
    pub(super) route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) charge_classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) charge_deviation: Option<f64>,
    pub(super) species: Vec<SpeciesReport>,
    pub(super) total_volume_nm3: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpeciesReport {
    pub(super) species: String,
    pub(super) count: f64,
    pub(super) radius_pm: f64,
    pub(super) volume_nm3: f64,
}

impl FormulaReport {
    pub(super) fn from_volume(volume: &FormulaVolume) -> Self {
        Self {
            formula: volume.formula.clone(),
            route: volume.route.to_string(),
            charge_classification: volume
                .classification
                .map(|classification| classification.to_string()),
            charge_deviation: volume.charge_deviation,
            species: volume
                .species
                .iter()
                .map(|entry| SpeciesReport {
                    species: entry.species.label(),
                    count: entry.count,
                    radius_pm: entry.radius_pm,
                    volume_nm3: entry.volume_nm3,
                })
                .collect(),
            total_volume_nm3: volume.total_nm3,
        }
    }
}

/// JSON shape of the `volumes` command report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BatchReport {
    pub(super) total: usize,
    pub(super) failed: usize,
    pub(super) records: Vec<RecordReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecordReport {
    pub(super) index: usize,
    pub(super) core: String,
    pub(super) diameter_nm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) descriptors: Option<RecordDescriptors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) error: Option<String>,
}

impl BatchReport {
    pub(super) fn from_batch(batch: &BatchOutcome) -> Self {
        let records: Vec<RecordReport> = batch
            .outcomes
            .iter()
            .map(|outcome| {
                let (descriptors, error) = match &outcome.result {
                    Ok(descriptors) => (Some(descriptors.clone()), None),
                    Err(error) => (None, Some(error.diagnostic_line())),
                };
                RecordReport {
                    index: outcome.index,
                    core: outcome.record.core.clone(),
                    diameter_nm: outcome.record.diameter_nm,
                    descriptors,
                    error,
                }
            })
            .collect();
        let failed = records
            .iter()
            .filter(|record| record.error.is_some())
            .count();
        Self {
            total: records.len(),
            failed,
            records,
        }
    }
}

/// JSON shape of the `fingerprint` command output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FingerprintReport {
    pub(super) orbitals: Vec<String>,
    pub(super) records: Vec<FingerprintRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FingerprintRow {
    pub(super) index: usize,
    pub(super) core: String,
    pub(super) fingerprint: Vec<f64>,
}

/// One-line text rendering of a record's descriptors, multi-valued doping
/// fields `/`-joined the way the input records join mixtures.
pub(super) fn render_record_line(
    index: usize,
    record: &ParticleRecord,
    descriptors: &RecordDescriptors,
) -> String {
    format!(
        "record {} [{}] particle={:.6} nm^3 surface={:.6} nm^2 \
         volumes core={:.6e} doping={} shell={:.6e} coating={:.6e} \
         amounts core={:.6e} doping={} shell={:.6e} coating={:.6e}",
        index,
        record.core,
        descriptors.particle_volume_nm3,
        descriptors.particle_surface_area_nm2,
        descriptors.core_volume_nm3,
        joined_or_dash(&descriptors.doping_volumes_joined()),
        descriptors.shell_volume_nm3,
        descriptors.coating_volume_nm3,
        descriptors.core_amount,
        joined_or_dash(&descriptors.doping_amounts_joined()),
        descriptors.shell_amount,
        descriptors.coating_amount,
    )
}

fn joined_or_dash(joined: &str) -> String {
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.to_string()
    }
}
