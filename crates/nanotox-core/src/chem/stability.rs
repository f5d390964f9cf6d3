//! Stability scoring and selection keys for charge combinations.
//!
//! A combination is preferred when its atoms sit closer to the ideal
//! per-atom charge, with the spread of assigned charges as the tie-break and
//! enumeration order as the final arbiter.

use std::cmp::Ordering;

use crate::numerics::population_std_dev;

/// Ideal charge per metal atom: the compensating magnitude spread uniformly
/// over every metal atom. Zero when there are no metal atoms, which also
/// covers oxygen-free formulas where the required magnitude is zero.
pub fn ideal_charge_per_atom(required_charge_magnitude: f64, total_metal_atoms: f64) -> f64 {
    if total_metal_atoms > 0.0 {
        required_charge_magnitude / total_metal_atoms
    } else {
        0.0
    }
}

/// Sum of per-atom distances from the ideal charge.
pub fn deviation_sum(charges: &[i32], ideal: f64) -> f64 {
    charges
        .iter()
        .map(|&charge| (f64::from(charge) - ideal).abs())
        .sum()
}

/// Population standard deviation of the assigned charges. A combination
/// using one distinct charge value spreads to 0.0 by convention.
pub fn charge_spread(charges: &[i32]) -> f64 {
    let values: Vec<f64> = charges.iter().map(|&charge| f64::from(charge)).collect();
    population_std_dev(&values)
}

/// Ranking key for one candidate combination.
///
/// `primary` is the stability score on integral paths and the absolute
/// rounded deviation on the fractional path; `spread` breaks ties. A
/// candidate replaces the incumbent only when strictly better, so equal keys
/// keep the first combination in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionKey {
    pub primary: f64,
    pub spread: f64,
}

impl SelectionKey {
    pub fn new(primary: f64, spread: f64) -> Self {
        Self { primary, spread }
    }

    pub fn improves_on(&self, incumbent: &Self) -> bool {
        match self.primary.total_cmp(&incumbent.primary) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.spread.total_cmp(&incumbent.spread) == Ordering::Less,
        }
    }
}
