//! Amount formulas: formula-unit counts per role, derived from the particle
//! geometry and per-unit volumes.

use crate::numerics::stable_sum;

/// Amount of a surface-bound layer (shell or coating): particle surface area
/// over the layer's per-unit volume. A role with volume 0 is absent and
/// contributes amount 0.
pub fn surface_layer_amount(particle_surface_area: f64, layer_volume: f64) -> f64 {
    if layer_volume != 0.0 {
        particle_surface_area / layer_volume
    } else {
        0.0
    }
}

/// Per-constituent doping amounts. Each rate is a percentage of the particle
/// volume; slices must be equal length, which the orchestrator validates
/// before calling.
pub fn doping_amounts(particle_volume: f64, rates_percent: &[f64], volumes: &[f64]) -> Vec<f64> {
    rates_percent
        .iter()
        .zip(volumes)
        .map(|(&rate, &volume)| (rate / 100.0 * particle_volume) / volume)
        .collect()
}

/// Volume fraction claimed by doping, out of 1.
pub fn doped_fraction(rates_percent: &[f64]) -> f64 {
    rates_percent.iter().map(|&rate| rate / 100.0).sum()
}

/// Core amount: whatever volume doping left behind, in core formula units.
pub fn core_amount(particle_volume: f64, core_volume: f64, doped_fraction: f64) -> f64 {
    ((1.0 - doped_fraction) * particle_volume) / core_volume
}

/// Total volume of a `/`-mixture whose constituents were priced separately.
pub fn mixture_volume(constituent_volumes: &[f64]) -> f64 {
    stable_sum(constituent_volumes)
}
