//! Curated reference data: the element catalogue, radius datasets,
//! electronic configurations, and per-role volume tables.

pub mod electron_config;
pub mod periodic;
pub mod radii;
mod radii_data;
pub mod tables;

pub use radii::{
    candidate_charges, effective_ionic_radius_pm, metallic_radius_pm, neutral_radius_pm, Species,
};
pub use tables::{RoleTableLoadError, RoleVolumeEntry, RoleVolumeTable};

use crate::domain::StructuralRole;

/// Ceiling on the number of charge combinations one formula may enumerate.
pub const DEFAULT_COMBINATION_BUDGET: u64 = 100_000;

/// All reference datasets a run needs, bundled so callers can swap role
/// tables or the enumeration budget without touching the built-in data.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    combination_budget: u64,
    core: RoleVolumeTable,
    doping: RoleVolumeTable,
    shell: RoleVolumeTable,
    coating: RoleVolumeTable,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            combination_budget: DEFAULT_COMBINATION_BUDGET,
            core: RoleVolumeTable::builtin(StructuralRole::Core),
            doping: RoleVolumeTable::builtin(StructuralRole::Doping),
            shell: RoleVolumeTable::builtin(StructuralRole::Shell),
            coating: RoleVolumeTable::builtin(StructuralRole::Coating),
        }
    }

    pub fn with_combination_budget(mut self, budget: u64) -> Self {
        self.combination_budget = budget;
        self
    }

    /// Replaces the table for the role the replacement itself names.
    pub fn with_role_table(mut self, table: RoleVolumeTable) -> Self {
        match table.role() {
            StructuralRole::Core => self.core = table,
            StructuralRole::Doping => self.doping = table,
            StructuralRole::Shell => self.shell = table,
            StructuralRole::Coating => self.coating = table,
        }
        self
    }

    pub const fn combination_budget(&self) -> u64 {
        self.combination_budget
    }

    pub fn role_table(&self, role: StructuralRole) -> &RoleVolumeTable {
        match role {
            StructuralRole::Core => &self.core,
            StructuralRole::Doping => &self.doping,
            StructuralRole::Shell => &self.shell,
            StructuralRole::Coating => &self.coating,
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
