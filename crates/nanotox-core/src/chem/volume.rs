//! Per-formula volume estimation.
//!
//! Three routes, checked in order: carbon-bearing formulas use neutral
//! radii and skip charge resolution, a lone non-oxygen element with integral
//! stoichiometry uses its metallic radius, and everything else resolves
//! charges and prices each assigned species by its effective ionic radius.
//! Radii are tabulated in picometers and divided by 1000, so all volumes
//! come out in nm^3.

use crate::chem::charge::{resolve_charges, ChargeClassification};
use crate::chem::formula::Composition;
use crate::domain::{NanotoxError, NanotoxResult};
use crate::numerics::{sphere_volume, stable_sum};
use crate::reference::{
    effective_ionic_radius_pm, metallic_radius_pm, neutral_radius_pm, ReferenceData, Species,
};

const PM_PER_NM: f64 = 1000.0;

/// Which radius dataset priced the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimationRoute {
    Organic,
    Metallic,
    Ionic,
}

impl EstimationRoute {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Metallic => "metallic",
            Self::Ionic => "ionic",
        }
    }
}

impl std::fmt::Display for EstimationRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One priced species in a formula's breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesVolume {
    pub species: Species,
    pub count: f64,
    pub radius_pm: f64,
    pub volume_nm3: f64,
}

/// Estimated volume of one formula with its full species breakdown.
///
/// `classification` and `charge_deviation` are present only on the ionic
/// route; the other routes never resolve charges.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaVolume {
    pub formula: String,
    pub route: EstimationRoute,
    pub classification: Option<ChargeClassification>,
    pub charge_deviation: Option<f64>,
    pub species: Vec<SpeciesVolume>,
    pub total_nm3: f64,
}

/// Parses a formula and estimates its volume.
pub fn estimate_formula_volume(
    formula: &str,
    reference: &ReferenceData,
) -> NanotoxResult<FormulaVolume> {
    let composition = Composition::parse_strict(formula)?;

    if composition.contains("C") {
        return estimate_organic(formula, &composition);
    }

    if let [entry] = composition.entries() {
        if entry.symbol != "O" && entry.count.fract() == 0.0 {
            return estimate_metallic(formula, &entry.symbol, entry.count);
        }
    }

    estimate_ionic(formula, &composition, reference)
}

fn estimate_organic(formula: &str, composition: &Composition) -> NanotoxResult<FormulaVolume> {
    let mut species = Vec::new();
    for entry in composition.entries() {
        let radius_pm = neutral_radius_pm(&entry.symbol)
            .ok_or_else(|| NanotoxError::unknown_species(&entry.symbol))?;
        species.push(priced(Species::neutral(&entry.symbol), entry.count, radius_pm));
    }
    Ok(assemble(formula, EstimationRoute::Organic, None, None, species))
}

fn estimate_metallic(formula: &str, symbol: &str, count: f64) -> NanotoxResult<FormulaVolume> {
    let radius_pm =
        metallic_radius_pm(symbol).ok_or_else(|| NanotoxError::unknown_species(symbol))?;
    let species = vec![priced(Species::neutral(symbol), count, radius_pm)];
    Ok(assemble(formula, EstimationRoute::Metallic, None, None, species))
}

fn estimate_ionic(
    formula: &str,
    composition: &Composition,
    reference: &ReferenceData,
) -> NanotoxResult<FormulaVolume> {
    let resolution = resolve_charges(formula, composition, reference)?;
    let mut species = Vec::new();
    for assignment in &resolution.assignments {
        let label = assignment.species.label();
        let radius_pm = effective_ionic_radius_pm(&label)
            .ok_or_else(|| NanotoxError::unknown_species(label))?;
        species.push(priced(
            assignment.species.clone(),
            assignment.count,
            radius_pm,
        ));
    }
    Ok(assemble(
        formula,
        EstimationRoute::Ionic,
        Some(resolution.classification),
        Some(resolution.charge_deviation),
        species,
    ))
}

fn priced(species: Species, count: f64, radius_pm: f64) -> SpeciesVolume {
    SpeciesVolume {
        species,
        count,
        radius_pm,
        volume_nm3: count * sphere_volume(radius_pm / PM_PER_NM),
    }
}

fn assemble(
    formula: &str,
    route: EstimationRoute,
    classification: Option<ChargeClassification>,
    charge_deviation: Option<f64>,
    species: Vec<SpeciesVolume>,
) -> FormulaVolume {
    let contributions: Vec<f64> = species.iter().map(|entry| entry.volume_nm3).collect();
    FormulaVolume {
        formula: formula.to_string(),
        route,
        classification,
        charge_deviation,
        total_nm3: stable_sum(&contributions),
        species,
    }
}
