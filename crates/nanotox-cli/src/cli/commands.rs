use super::reports::{
    render_record_line, BatchReport, FingerprintReport, FingerprintRow, FormulaReport,
};
use super::CliError;
use anyhow::Context;
use nanotox_core::chem::estimate_formula_volume;
use nanotox_core::domain::{FailureMode, NanotoxError, ParticleRecord, StructuralRole};
use nanotox_core::pipeline::{evaluate_batch, evaluate_record, log_scaled, record_fingerprint};
use nanotox_core::reference::electron_config::ORBITAL_LABELS;
use nanotox_core::reference::{ReferenceData, RoleVolumeTable};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub(super) struct ResolveArgs {
    /// Chemical formula to resolve
    #[arg(value_name = "FORMULA")]
    formula: String,

    #[command(flatten)]
    reference: ReferenceArgs,
}

#[derive(clap::Args)]
pub(super) struct VolumesArgs {
    /// Records JSON file (array of particle records)
    #[arg(value_name = "RECORDS")]
    records: PathBuf,

    /// JSON report output path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Abort the batch at the first failing record
    #[arg(long)]
    fail_fast: bool,

    #[command(flatten)]
    reference: ReferenceArgs,
}

#[derive(clap::Args)]
pub(super) struct FingerprintArgs {
    /// Records JSON file (array of particle records)
    #[arg(value_name = "RECORDS")]
    records: PathBuf,

    /// Apply the sign-preserving log10 transform to each slot
    #[arg(long)]
    log10: bool,

    #[command(flatten)]
    reference: ReferenceArgs,
}

#[derive(clap::Args, Default)]
pub(super) struct ReferenceArgs {
    /// Core volume table override (JSON entries)
    #[arg(long, value_name = "PATH")]
    core_table: Option<PathBuf>,

    /// Doping volume table override (JSON entries)
    #[arg(long, value_name = "PATH")]
    doping_table: Option<PathBuf>,

    /// Shell volume table override (JSON entries)
    #[arg(long, value_name = "PATH")]
    shell_table: Option<PathBuf>,

    /// Coating volume table override (JSON entries)
    #[arg(long, value_name = "PATH")]
    coating_table: Option<PathBuf>,

    /// Charge enumeration budget override
    #[arg(long, value_name = "COUNT")]
    budget: Option<u64>,
}

impl ReferenceArgs {
    fn build(&self) -> Result<ReferenceData, CliError> {
        let mut reference = ReferenceData::builtin();
        if let Some(budget) = self.budget {
            reference = reference.with_combination_budget(budget);
        }
        let overrides = [
            (StructuralRole::Core, &self.core_table),
            (StructuralRole::Doping, &self.doping_table),
            (StructuralRole::Shell, &self.shell_table),
            (StructuralRole::Coating, &self.coating_table),
        ];
        for (role, path) in overrides {
            if let Some(path) = path {
                let table = RoleVolumeTable::from_json_path(role, path)
                    .map_err(|error| CliError::Compute(NanotoxError::from(error)))?;
                reference = reference.with_role_table(table);
            }
        }
        Ok(reference)
    }
}

pub(super) fn run_resolve_command(args: ResolveArgs) -> Result<i32, CliError> {
    let reference = args.reference.build()?;
    let span = tracing::info_span!("resolve", formula = %args.formula).entered();
    let volume = estimate_formula_volume(&args.formula, &reference).map_err(CliError::Compute)?;
    tracing::info!(
        route = %volume.route,
        total_nm3 = volume.total_nm3,
        "formula volume estimated"
    );
    drop(span);

    println!("{}", to_pretty_json(&FormulaReport::from_volume(&volume))?);
    Ok(0)
}

pub(super) fn run_volumes_command(args: VolumesArgs) -> Result<i32, CliError> {
    let reference = args.reference.build()?;
    let records = load_records(&args.records)?;
    let failure_mode = if args.fail_fast {
        FailureMode::AbortBatch
    } else {
        FailureMode::SkipAndReport
    };

    let span = tracing::info_span!(
        "volumes",
        records = records.len(),
        fail_fast = args.fail_fast
    )
    .entered();
    let batch = evaluate_batch(&records, &reference, failure_mode).map_err(CliError::Compute)?;
    drop(span);

    for outcome in &batch.outcomes {
        match &outcome.result {
            Ok(descriptors) => {
                println!(
                    "{}",
                    render_record_line(outcome.index, &outcome.record, descriptors)
                );
            }
            Err(error) => {
                println!(
                    "record {} [{}] {}",
                    outcome.index,
                    outcome.record.core,
                    error.diagnostic_line()
                );
            }
        }
    }

    let report = BatchReport::from_batch(&batch);
    println!(
        "Processed {} records ({} failed).",
        report.total, report.failed
    );
    if let Some(path) = &args.report {
        write_report(path, &report)?;
        println!("JSON report: {}", path.display());
    }

    if report.failed == 0 { Ok(0) } else { Ok(1) }
}

pub(super) fn run_fingerprint_command(args: FingerprintArgs) -> Result<i32, CliError> {
    let reference = args.reference.build()?;
    let records = load_records(&args.records)?;

    let span = tracing::info_span!(
        "fingerprint",
        records = records.len(),
        log10 = args.log10
    )
    .entered();
    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let descriptors = evaluate_record(record, &reference).map_err(CliError::Compute)?;
        let mut fingerprint = record_fingerprint(record, &descriptors, &reference);
        if args.log10 {
            fingerprint = log_scaled(&fingerprint);
        }
        rows.push(FingerprintRow {
            index,
            core: record.core.clone(),
            fingerprint: fingerprint.to_vec(),
        });
    }
    drop(span);

    let report = FingerprintReport {
        orbitals: ORBITAL_LABELS.iter().map(|label| label.to_string()).collect(),
        records: rows,
    };
    println!("{}", to_pretty_json(&report)?);
    Ok(0)
}

fn load_records(path: &Path) -> Result<Vec<ParticleRecord>, CliError> {
    let source = fs::read_to_string(path).map_err(|source| {
        CliError::Compute(NanotoxError::invalid_record(format!(
            "failed to read records file '{}': {}",
            path.display(),
            source
        )))
    })?;
    serde_json::from_str(&source).map_err(|source| {
        CliError::Compute(NanotoxError::invalid_record(format!(
            "failed to parse records file '{}': {}",
            path.display(),
            source
        )))
    })
}

fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create report directory '{}'", parent.display()))?;
        }
    }
    let payload = serde_json::to_string_pretty(report).context("serialize JSON report")?;
    fs::write(path, payload).with_context(|| format!("write report '{}'", path.display()))?;
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value).context("serialize JSON output")?)
}
