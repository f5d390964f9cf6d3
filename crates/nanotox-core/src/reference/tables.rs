//! Per-role volume tables: built-in curated datasets plus JSON overrides.
//!
//! Volumes are nm^3 per formula unit. Coating entries additionally carry the
//! molecular formula their name stands for, which the fingerprint stage
//! scans in place of the trade name.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{NanotoxError, StructuralRole};

const BUILTIN_CORE: &[(&str, f64)] = &[
    ("Fe3O4", 0.04832075701785073),
    ("Fe2O3", 0.03587594090644425),
    ("TiO2", 0.023915667814365413),
    ("ZnO", 0.013191438643878218),
    ("CuO", 0.013123550921029245),
    ("CeO2", 0.02574641156009017),
    ("SiO2", 0.023256163216974046),
    ("Al2O3", 0.03576498299551211),
    ("ZrO2", 0.02455153821022383),
    ("Mn3O4", 0.048870560864970165),
    ("Co3O4", 0.048482658995253475),
    ("NiO", 0.01287009560331803),
    ("Ag", 0.012507660530848883),
    ("Au", 0.012507660530848883),
];

const BUILTIN_DOPING: &[(&str, f64)] = &[
    ("Ag", 0.006370626302704502),
    ("Al", 0.0006414310148552667),
    ("Ce", 0.004315714736781624),
    ("Co", 0.0011503465099894626),
    ("Cu", 0.0016295105990953868),
    ("Er", 0.0029529672418780566),
    ("Eu", 0.0035574478827617717),
    ("Fe", 0.0006969099703213357),
    ("Gd", 0.003423918684188723),
    ("Mn", 0.0012598331083621694),
    ("Ni", 0.0013760552813841728),
    ("Tb", 0.003293773357894707),
    ("Y", 0.0030536280592892784),
    ("Zn", 0.00169739832194436),
    ("Zr", 0.0015634575663561103),
];

const BUILTIN_SHELL: &[(&str, f64)] = &[
    ("SiO2", 0.023256163216974046),
    ("TiO2", 0.023915667814365413),
    ("ZnO", 0.013191438643878218),
    ("Al2O3", 0.03576498299551211),
    ("Fe2O3", 0.03587594090644425),
    ("CeO2", 0.02574641156009017),
    ("ZrO2", 0.02455153821022383),
    ("ZnS", 0.027791483657821997),
    ("Ag", 0.012507660530848883),
    ("Au", 0.012507660530848883),
];

const BUILTIN_COATING: &[(&str, &str, f64)] = &[
    ("PEG", "C2H4O", 0.005278453711079112),
    ("PVP", "C6H9NO", 0.015081792015809734),
    ("Citrate", "C6H5O7", 0.018493667928159693),
    ("Dextran", "C6H10O5", 0.017370401946844177),
    ("Chitosan", "C6H11NO4", 0.018070644623372194),
    ("Oleic acid", "C18H34O2", 0.04089811605521411),
    ("Starch", "C6H10O5", 0.017370401946844177),
];

/// One named material with its per-formula-unit volume.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleVolumeEntry {
    pub name: String,
    pub volume_nm3: f64,
    #[serde(default)]
    pub molecular_formula: Option<String>,
}

/// Name-keyed volume table for one structural role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleVolumeTable {
    role: StructuralRole,
    entries: Vec<RoleVolumeEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum RoleTableLoadError {
    #[error("failed to read {role} volume table '{}': {source}", path.display())]
    Read {
        role: StructuralRole,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {role} volume table '{}': {source}", path.display())]
    Parse {
        role: StructuralRole,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl RoleTableLoadError {
    const fn role(&self) -> StructuralRole {
        match self {
            Self::Read { role, .. } | Self::Parse { role, .. } => *role,
        }
    }

    fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

impl From<RoleTableLoadError> for NanotoxError {
    fn from(error: RoleTableLoadError) -> Self {
        NanotoxError::table_load(error.path().display().to_string(), error.to_string())
            .with_role(error.role())
    }
}

impl RoleVolumeTable {
    /// The curated table shipped with the crate for `role`.
    pub fn builtin(role: StructuralRole) -> Self {
        let entries = match role {
            StructuralRole::Core => plain_entries(BUILTIN_CORE),
            StructuralRole::Doping => plain_entries(BUILTIN_DOPING),
            StructuralRole::Shell => plain_entries(BUILTIN_SHELL),
            StructuralRole::Coating => BUILTIN_COATING
                .iter()
                .map(|&(name, formula, volume_nm3)| RoleVolumeEntry {
                    name: name.to_owned(),
                    volume_nm3,
                    molecular_formula: Some(formula.to_owned()),
                })
                .collect(),
        };
        Self { role, entries }
    }

    /// Loads an override table from a JSON array of entries.
    pub fn from_json_path(
        role: StructuralRole,
        path: impl AsRef<Path>,
    ) -> Result<Self, RoleTableLoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RoleTableLoadError::Read {
            role,
            path: path.to_path_buf(),
            source,
        })?;
        let entries = serde_json::from_str(&source).map_err(|source| RoleTableLoadError::Parse {
            role,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { role, entries })
    }

    pub const fn role(&self) -> StructuralRole {
        self.role
    }

    pub fn entries(&self) -> &[RoleVolumeEntry] {
        &self.entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn volume_for(&self, name: &str) -> Option<f64> {
        self.find(name).map(|entry| entry.volume_nm3)
    }

    pub fn formula_for(&self, name: &str) -> Option<&str> {
        self.find(name)
            .and_then(|entry| entry.molecular_formula.as_deref())
    }

    fn find(&self, name: &str) -> Option<&RoleVolumeEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

fn plain_entries(rows: &[(&str, f64)]) -> Vec<RoleVolumeEntry> {
    rows.iter()
        .map(|&(name, volume_nm3)| RoleVolumeEntry {
            name: name.to_owned(),
            volume_nm3,
            molecular_formula: None,
        })
        .collect()
}
