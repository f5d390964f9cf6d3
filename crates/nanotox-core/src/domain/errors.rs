use super::StructuralRole;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type NanotoxResult<T> = Result<T, NanotoxError>;

/// Coarse failure class, mapped to stable process exit codes by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanotoxErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl NanotoxErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

/// Structured error kind. The first four are the resolution failures a
/// record can hit; the rest cover the enumeration budget, malformed records,
/// table loading, and invariant breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanotoxErrorKind {
    InvalidFormula,
    UnresolvableCharge,
    UnknownSpecies,
    UnknownLookupName,
    CombinationBudget,
    InvalidRecord,
    TableLoad,
    Internal,
}

impl NanotoxErrorKind {
    pub const fn category(self) -> NanotoxErrorCategory {
        match self {
            Self::InvalidFormula | Self::InvalidRecord => NanotoxErrorCategory::InputValidationError,
            Self::TableLoad => NanotoxErrorCategory::IoSystemError,
            Self::UnresolvableCharge
            | Self::UnknownSpecies
            | Self::UnknownLookupName
            | Self::CombinationBudget => NanotoxErrorCategory::ComputationError,
            Self::Internal => NanotoxErrorCategory::InternalError,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidFormula => "INPUT.INVALID_FORMULA",
            Self::UnresolvableCharge => "RUN.UNRESOLVABLE_CHARGE",
            Self::UnknownSpecies => "RUN.UNKNOWN_SPECIES",
            Self::UnknownLookupName => "RUN.UNKNOWN_LOOKUP_NAME",
            Self::CombinationBudget => "RUN.COMBINATION_BUDGET",
            Self::InvalidRecord => "INPUT.INVALID_RECORD",
            Self::TableLoad => "IO.TABLE_LOAD",
            Self::Internal => "SYS.INTERNAL",
        }
    }
}

/// Library-level error value. Carries the offending string (formula, species
/// label, or lookup name) and, once the orchestrator knows it, the structural
/// role that was being processed. Library code never terminates the process;
/// the CLI decides what an exit code means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NanotoxError {
    kind: NanotoxErrorKind,
    role: Option<StructuralRole>,
    subject: String,
    message: String,
}

impl NanotoxError {
    pub fn new(
        kind: NanotoxErrorKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            role: None,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn invalid_formula(formula: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NanotoxErrorKind::InvalidFormula, formula, message)
    }

    pub fn unresolvable_charge(formula: impl Into<String>) -> Self {
        let formula = formula.into();
        let message = format!(
            "no exact or approximate charge combination balances '{formula}'"
        );
        Self::new(NanotoxErrorKind::UnresolvableCharge, formula, message)
    }

    pub fn unknown_species(species: impl Into<String>) -> Self {
        let species = species.into();
        let message = format!("species '{species}' is out of domain for the curated radius tables");
        Self::new(NanotoxErrorKind::UnknownSpecies, species, message)
    }

    pub fn unknown_lookup_name(role: StructuralRole, name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!(
            "{} entry '{name}' is missing from its volume table",
            role.as_str()
        );
        Self::new(NanotoxErrorKind::UnknownLookupName, name, message).with_role(role)
    }

    pub fn combination_budget(formula: impl Into<String>, predicted: u128, budget: u64) -> Self {
        let formula = formula.into();
        let message = format!(
            "charge enumeration for '{formula}' would produce {predicted} candidates, over the budget of {budget}"
        );
        Self::new(NanotoxErrorKind::CombinationBudget, formula, message)
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::new(NanotoxErrorKind::InvalidRecord, "", message)
    }

    pub fn table_load(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NanotoxErrorKind::TableLoad, subject, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(NanotoxErrorKind::Internal, "", message)
    }

    pub fn with_role(mut self, role: StructuralRole) -> Self {
        self.role = Some(role);
        self
    }

    pub const fn kind(&self) -> NanotoxErrorKind {
        self.kind
    }

    pub const fn category(&self) -> NanotoxErrorCategory {
        self.kind.category()
    }

    pub const fn role(&self) -> Option<StructuralRole> {
        self.role
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.kind.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category().is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        match self.role {
            Some(role) => format!(
                "{}: [{}] ({}) {}",
                severity,
                self.kind.code(),
                role.as_str(),
                self.message
            ),
            None => format!("{}: [{}] {}", severity, self.kind.code(), self.message),
        }
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for NanotoxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category().as_str(),
            self.kind.code(),
            self.message
        )
    }
}

impl Error for NanotoxError {}
