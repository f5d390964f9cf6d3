//! Scalar helpers shared by the charge resolver, volume estimator, and
//! orchestrator. Radius tables carry picometers; all geometry here works in
//! the caller's unit (the estimator divides by 1000 to get nanometers before
//! calling in).

use std::f64::consts::PI;

/// Hard-sphere volume, `(4/3)·π·r³`.
pub fn sphere_volume(radius: f64) -> f64 {
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Hard-sphere surface area, `4·π·r²`.
pub fn sphere_surface(radius: f64) -> f64 {
    4.0 * PI * radius.powi(2)
}

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

pub fn stable_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for &value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

/// Population standard deviation; 0.0 for empty input and for inputs with a
/// single distinct value (the tie-break convention for uniform charge
/// assignments).
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let first = values[0];
    if values.iter().all(|&value| value == first) {
        return 0.0;
    }

    let mean = stable_sum(values) / values.len() as f64;
    let squared: Vec<f64> = values
        .iter()
        .map(|&value| (value - mean) * (value - mean))
        .collect();
    (stable_sum(&squared) / values.len() as f64).sqrt()
}

/// Round half away from zero at the given number of decimal places. Charge
/// totals are classified after rounding to two decimals in fractional mode.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
