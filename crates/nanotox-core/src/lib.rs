//! Charge balancing and volume estimation for engineered nanoparticles.
//!
//! The crate resolves oxidation states for nanoparticle formulas, prices
//! per-species volumes from curated radius tables, and rolls per-record
//! role descriptors up into electron-configuration fingerprints.

pub mod chem;
pub mod domain;
pub mod numerics;
pub mod pipeline;
pub mod reference;

pub use chem::{
    estimate_formula_volume, resolve_charges, ChargeClassification, ChargeResolution, Composition,
    FormulaVolume,
};
pub use domain::{
    BatchOutcome, FailureMode, NanotoxError, NanotoxResult, ParticleRecord, RecordDescriptors,
    StructuralRole,
};
pub use pipeline::{evaluate_batch, evaluate_record, record_fingerprint};
pub use reference::{ReferenceData, RoleVolumeTable};
