//! Formula chemistry: parsing, charge resolution, stability selection, and
//! volume estimation.

pub mod charge;
pub mod formula;
pub mod stability;
pub mod volume;

pub use charge::{resolve_charges, ChargeAssignment, ChargeClassification, ChargeResolution};
pub use formula::{Composition, ElementCount};
pub use volume::{estimate_formula_volume, EstimationRoute, FormulaVolume, SpeciesVolume};
