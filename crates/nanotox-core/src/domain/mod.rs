pub mod errors;

pub use errors::{NanotoxError, NanotoxErrorCategory, NanotoxErrorKind, NanotoxResult};

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Structural role a material plays inside a nanoparticle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralRole {
    Core,
    Shell,
    Doping,
    Coating,
}

impl StructuralRole {
    pub const ALL: [StructuralRole; 4] = [Self::Core, Self::Shell, Self::Doping, Self::Coating];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Shell => "Shell",
            Self::Doping => "Doping",
            Self::Coating => "Coating",
        }
    }
}

impl Display for StructuralRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Batch behaviour when a record fails to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailureMode {
    /// Stop at the first failing record and surface its error.
    #[default]
    AbortBatch,
    /// Keep going, recording the error alongside the surviving records.
    SkipAndReport,
}

/// One nanoparticle characterisation row, as it arrives from upstream datasets.
///
/// `shell`, `doping`, `doping_rate_percent`, and `coating` are free-text
/// material fields; an empty string means the role is absent. Mixture fields
/// list constituents separated by `/`, and `doping_rate_percent` carries one
/// percentage per doping constituent in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleRecord {
    pub core: String,
    #[serde(default)]
    pub shell: String,
    #[serde(default)]
    pub doping: String,
    #[serde(default)]
    pub doping_rate_percent: String,
    #[serde(default)]
    pub coating: String,
    pub diameter_nm: f64,
}

impl ParticleRecord {
    pub fn new(core: impl Into<String>, diameter_nm: f64) -> Self {
        Self {
            core: core.into(),
            shell: String::new(),
            doping: String::new(),
            doping_rate_percent: String::new(),
            coating: String::new(),
            diameter_nm,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_doping(
        mut self,
        doping: impl Into<String>,
        rate_percent: impl Into<String>,
    ) -> Self {
        self.doping = doping.into();
        self.doping_rate_percent = rate_percent.into();
        self
    }

    pub fn with_coating(mut self, coating: impl Into<String>) -> Self {
        self.coating = coating.into();
        self
    }

    pub fn shell_constituents(&self) -> Vec<&str> {
        split_mixture(&self.shell)
    }

    pub fn doping_constituents(&self) -> Vec<&str> {
        split_mixture(&self.doping)
    }

    pub fn coating_constituents(&self) -> Vec<&str> {
        split_mixture(&self.coating)
    }

    /// Doping rates parsed as percentages, in constituent order.
    pub fn doping_rates(&self) -> NanotoxResult<Vec<f64>> {
        split_mixture(&self.doping_rate_percent)
            .into_iter()
            .map(|raw| {
                raw.parse::<f64>().map_err(|_| {
                    NanotoxError::invalid_record(format!(
                        "doping rate '{raw}' is not a number in '{}'",
                        self.doping_rate_percent
                    ))
                    .with_role(StructuralRole::Doping)
                })
            })
            .collect()
    }
}

/// Splits a `/`-separated mixture field into trimmed constituents.
///
/// A blank field has no constituents at all, so absent roles fall out of the
/// per-constituent loops naturally.
pub fn split_mixture(field: &str) -> Vec<&str> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    field.split('/').map(str::trim).collect()
}

/// Volume and amount descriptors for one evaluated record.
///
/// Volumes are in nm^3 and the surface area in nm^2. Amounts are counts of
/// formula units, dimensionless. Doping vectors stay aligned with the record's
/// doping constituent order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDescriptors {
    pub particle_volume_nm3: f64,
    pub particle_surface_area_nm2: f64,
    pub core_volume_nm3: f64,
    pub doping_volumes_nm3: Vec<f64>,
    pub shell_volume_nm3: f64,
    pub coating_volume_nm3: f64,
    pub core_amount: f64,
    pub doping_amounts: Vec<f64>,
    pub shell_amount: f64,
    pub coating_amount: f64,
}

impl RecordDescriptors {
    /// Doping volumes rendered as a single `/`-joined field, mirroring the
    /// mixture notation of the input records.
    pub fn doping_volumes_joined(&self) -> String {
        join_mixture(&self.doping_volumes_nm3)
    }

    pub fn doping_amounts_joined(&self) -> String {
        join_mixture(&self.doping_amounts)
    }
}

fn join_mixture(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Outcome of evaluating one record within a batch.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub index: usize,
    pub record: ParticleRecord,
    pub result: NanotoxResult<RecordDescriptors>,
}

/// Aggregate outcome of a batch run under [`FailureMode::SkipAndReport`].
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchOutcome {
    pub fn successes(&self) -> impl Iterator<Item = (usize, &RecordDescriptors)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|descriptors| (outcome.index, descriptors))
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &NanotoxError)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|error| (outcome.index, error))
        })
    }

    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }
}
