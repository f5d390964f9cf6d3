//! SDEC fingerprint generation.
//!
//! A record's element amounts are folded through the 18-orbital electronic
//! configurations: each element contributes its configuration scaled by its
//! amount, summed into one fixed-width vector. Elements without a catalogued
//! configuration are skipped. An optional signed log10 transform compresses
//! the dynamic range for downstream models.

use crate::chem::formula::Composition;
use crate::domain::{ParticleRecord, RecordDescriptors, StructuralRole};
use crate::reference::electron_config::configuration_for_symbol;
use crate::reference::ReferenceData;

/// Number of orbital slots in a fingerprint, matching
/// [`crate::reference::electron_config::ORBITAL_LABELS`].
pub const FINGERPRINT_WIDTH: usize = 18;

/// Per-element amounts for one evaluated record, in first-occurrence order.
///
/// Each role's material text is scanned leniently for element tokens and its
/// elements are scaled by the role's amount: the core name by the core
/// amount, each doping constituent by its own amount, shell constituents by
/// the shell amount, and coating constituents by the coating amount. Coating
/// names present in the coating table are swapped for their molecular
/// formula first; unlisted ones are scanned as written. The same element
/// reached through several roles accumulates.
pub fn element_amounts(
    record: &ParticleRecord,
    descriptors: &RecordDescriptors,
    reference: &ReferenceData,
) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    contribute(&mut totals, &record.core, descriptors.core_amount);

    for (constituent, &amount) in record
        .doping_constituents()
        .iter()
        .zip(&descriptors.doping_amounts)
    {
        contribute(&mut totals, constituent, amount);
    }

    for constituent in record.shell_constituents() {
        contribute(&mut totals, constituent, descriptors.shell_amount);
    }

    let coating_table = reference.role_table(StructuralRole::Coating);
    for constituent in record.coating_constituents() {
        let material = coating_table.formula_for(constituent).unwrap_or(constituent);
        contribute(&mut totals, material, descriptors.coating_amount);
    }

    totals
}

fn contribute(totals: &mut Vec<(String, f64)>, material: &str, amount: f64) {
    for entry in Composition::scan_lenient(material).entries() {
        let contribution = entry.count * amount;
        match totals.iter_mut().find(|(symbol, _)| symbol == &entry.symbol) {
            Some((_, total)) => *total += contribution,
            None => totals.push((entry.symbol.clone(), contribution)),
        }
    }
}

/// Folds element amounts into the 18-orbital fingerprint vector.
pub fn orbital_fingerprint(amounts: &[(String, f64)]) -> [f64; FINGERPRINT_WIDTH] {
    let mut fingerprint = [0.0; FINGERPRINT_WIDTH];
    for (symbol, amount) in amounts {
        let Some(configuration) = configuration_for_symbol(symbol) else {
            continue;
        };
        for (slot, occupancy) in fingerprint.iter_mut().zip(configuration) {
            *slot += occupancy * amount;
        }
    }
    fingerprint
}

/// Fingerprint for one evaluated record.
pub fn record_fingerprint(
    record: &ParticleRecord,
    descriptors: &RecordDescriptors,
    reference: &ReferenceData,
) -> [f64; FINGERPRINT_WIDTH] {
    orbital_fingerprint(&element_amounts(record, descriptors, reference))
}

/// Signed log compression: `sign(x) * log10(1 + |x|)`, with 0 at 0.
pub fn log_transform(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    value.signum() * (1.0 + value.abs()).log10()
}

pub fn log_scaled(fingerprint: &[f64; FINGERPRINT_WIDTH]) -> [f64; FINGERPRINT_WIDTH] {
    fingerprint.map(log_transform)
}
