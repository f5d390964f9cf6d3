//! Record evaluation: role volumes, amounts, and batch driving.
//!
//! Each record is processed role by role in structural order: particle
//! geometry, core, doping, shell, coating. Errors are tagged with the role
//! that raised them and abort the record; the batch driver decides whether a
//! failed record aborts the run or is carried as a per-record failure.

pub mod amounts;
pub mod fingerprint;

pub use fingerprint::{
    element_amounts, log_scaled, log_transform, orbital_fingerprint, record_fingerprint,
    FINGERPRINT_WIDTH,
};

use crate::chem::estimate_formula_volume;
use crate::domain::{
    BatchOutcome, FailureMode, NanotoxError, NanotoxResult, ParticleRecord, RecordDescriptors,
    RecordOutcome, StructuralRole,
};
use crate::numerics::{sphere_surface, sphere_volume};
use crate::reference::ReferenceData;

/// Evaluates one record into its volume and amount descriptors.
pub fn evaluate_record(
    record: &ParticleRecord,
    reference: &ReferenceData,
) -> NanotoxResult<RecordDescriptors> {
    // Particle geometry evaluates the spheres at the diameter value itself;
    // downstream amounts are calibrated against that convention.
    let particle_volume_nm3 = sphere_volume(record.diameter_nm);
    let particle_surface_area_nm2 = sphere_surface(record.diameter_nm);

    let core_volume_nm3 = named_or_estimated_volume(&record.core, StructuralRole::Core, reference)?;
    let doping_volumes_nm3 = doping_volumes(record, reference)?;
    let shell_volume_nm3 = table_mixture_volume(
        &record.shell_constituents(),
        StructuralRole::Shell,
        reference,
    )?;
    let coating_volume_nm3 = coating_volume(record, reference)?;

    let (doping_amounts, doped_fraction) = if doping_applies(record) {
        let rates = record.doping_rates()?;
        if rates.len() != doping_volumes_nm3.len() {
            return Err(NanotoxError::invalid_record(format!(
                "record lists {} doping constituents but {} rates",
                doping_volumes_nm3.len(),
                rates.len()
            ))
            .with_role(StructuralRole::Doping));
        }
        (
            amounts::doping_amounts(particle_volume_nm3, &rates, &doping_volumes_nm3),
            amounts::doped_fraction(&rates),
        )
    } else {
        (Vec::new(), 0.0)
    };

    Ok(RecordDescriptors {
        particle_volume_nm3,
        particle_surface_area_nm2,
        core_volume_nm3,
        shell_volume_nm3,
        coating_volume_nm3,
        core_amount: amounts::core_amount(particle_volume_nm3, core_volume_nm3, doped_fraction),
        doping_amounts,
        shell_amount: amounts::surface_layer_amount(particle_surface_area_nm2, shell_volume_nm3),
        coating_amount: amounts::surface_layer_amount(
            particle_surface_area_nm2,
            coating_volume_nm3,
        ),
        doping_volumes_nm3,
    })
}

/// Evaluates a batch of records under the given failure mode.
///
/// `AbortBatch` surfaces the first record error as the batch error;
/// `SkipAndReport` always returns the full outcome list.
pub fn evaluate_batch(
    records: &[ParticleRecord],
    reference: &ReferenceData,
    failure_mode: FailureMode,
) -> NanotoxResult<BatchOutcome> {
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let result = evaluate_record(record, reference);
        if failure_mode == FailureMode::AbortBatch {
            if let Err(error) = &result {
                return Err(error.clone());
            }
        }
        outcomes.push(RecordOutcome {
            index,
            record: record.clone(),
            result,
        });
    }
    Ok(BatchOutcome { outcomes })
}

/// Doping participates only when both the names and the rates are present.
fn doping_applies(record: &ParticleRecord) -> bool {
    !record.doping_constituents().is_empty()
        && !crate::domain::split_mixture(&record.doping_rate_percent).is_empty()
}

/// Table lookup by exact name first, then on-the-fly formula estimation.
fn named_or_estimated_volume(
    name: &str,
    role: StructuralRole,
    reference: &ReferenceData,
) -> NanotoxResult<f64> {
    if let Some(volume) = reference.role_table(role).volume_for(name) {
        return Ok(volume);
    }
    estimate_formula_volume(name, reference)
        .map(|estimate| estimate.total_nm3)
        .map_err(|error| error.with_role(role))
}

/// Table-only lookup for every constituent of a mixture, volumes summed.
fn table_mixture_volume(
    constituents: &[&str],
    role: StructuralRole,
    reference: &ReferenceData,
) -> NanotoxResult<f64> {
    let table = reference.role_table(role);
    let volumes = constituents
        .iter()
        .map(|name| {
            table
                .volume_for(name)
                .ok_or_else(|| NanotoxError::unknown_lookup_name(role, *name))
        })
        .collect::<NanotoxResult<Vec<f64>>>()?;
    Ok(amounts::mixture_volume(&volumes))
}

/// Doping volumes stay per-constituent so rates and amounts can line up.
fn doping_volumes(record: &ParticleRecord, reference: &ReferenceData) -> NanotoxResult<Vec<f64>> {
    let table = reference.role_table(StructuralRole::Doping);
    record
        .doping_constituents()
        .iter()
        .map(|name| {
            table
                .volume_for(name)
                .ok_or_else(|| NanotoxError::unknown_lookup_name(StructuralRole::Doping, *name))
        })
        .collect()
}

/// Coating constituents each take the named-or-estimated route, summed.
fn coating_volume(record: &ParticleRecord, reference: &ReferenceData) -> NanotoxResult<f64> {
    let volumes = record
        .coating_constituents()
        .iter()
        .map(|name| named_or_estimated_volume(name, StructuralRole::Coating, reference))
        .collect::<NanotoxResult<Vec<f64>>>()?;
    Ok(amounts::mixture_volume(&volumes))
}
