//! Ground-state electronic configurations along the fingerprint orbital axis.
//!
//! Occupancies are derived on demand: Madelung-order aufbau filling followed
//! by the tabulated anomalous transfers (Cr, Cu, the 4d and 5d exceptions,
//! and the lanthanide/actinide d-block intrusions). Elements needing
//! orbitals beyond 6d have no configuration here and are skipped by the
//! fingerprint accumulator.

use super::periodic;

/// Orbital axis of the fingerprint vectors, 1s through 7s.
pub const ORBITAL_LABELS: [&str; 18] = [
    "1s", "2s", "2p", "3s", "3p", "3d", "4s", "4p", "4d", "4f", "5s", "5p", "5d", "5f", "6s",
    "6p", "6d", "7s",
];

/// Madelung filling order.
const FILL_ORDER: [&str; 18] = [
    "1s", "2s", "2p", "3s", "3p", "4s", "3d", "4p", "5s", "4d", "5p", "6s", "4f", "5d", "6p",
    "7s", "5f", "6d",
];

/// Departures from Madelung filling, as `(z, from, to, moved)`.
const ANOMALOUS_TRANSFERS: &[(u32, &str, &str, f64)] = &[
    (24, "4s", "3d", 1.0),
    (29, "4s", "3d", 1.0),
    (41, "5s", "4d", 1.0),
    (42, "5s", "4d", 1.0),
    (44, "5s", "4d", 1.0),
    (45, "5s", "4d", 1.0),
    (46, "5s", "4d", 2.0),
    (47, "5s", "4d", 1.0),
    (57, "4f", "5d", 1.0),
    (58, "4f", "5d", 1.0),
    (64, "4f", "5d", 1.0),
    (78, "6s", "5d", 1.0),
    (79, "6s", "5d", 1.0),
    (89, "5f", "6d", 1.0),
    (90, "5f", "6d", 2.0),
    (91, "5f", "6d", 1.0),
    (92, "5f", "6d", 1.0),
    (93, "5f", "6d", 1.0),
    (96, "5f", "6d", 1.0),
];

fn orbital_position(label: &str) -> Option<usize> {
    ORBITAL_LABELS.iter().position(|known| *known == label)
}

fn subshell_capacity(label: &str) -> f64 {
    match label.as_bytes().last() {
        Some(b's') => 2.0,
        Some(b'p') => 6.0,
        Some(b'd') => 10.0,
        _ => 14.0,
    }
}

/// Ground-state occupancies along [`ORBITAL_LABELS`], or `None` when the
/// electrons do not fit on the tabulated axis (z > 112).
pub fn configuration_for_atomic_number(z: u32) -> Option<[f64; 18]> {
    let mut occupancy = [0.0; 18];
    let mut remaining = f64::from(z);
    for label in FILL_ORDER {
        if remaining <= 0.0 {
            break;
        }
        let slot = orbital_position(label)?;
        let filled = remaining.min(subshell_capacity(label));
        occupancy[slot] = filled;
        remaining -= filled;
    }
    if remaining > 0.0 {
        return None;
    }
    if let Some(&(_, from, to, moved)) = ANOMALOUS_TRANSFERS.iter().find(|entry| entry.0 == z) {
        let from_slot = orbital_position(from)?;
        let to_slot = orbital_position(to)?;
        occupancy[from_slot] -= moved;
        occupancy[to_slot] += moved;
    }
    Some(occupancy)
}

pub fn configuration_for_symbol(symbol: &str) -> Option<[f64; 18]> {
    configuration_for_atomic_number(periodic::atomic_number(symbol)?)
}
