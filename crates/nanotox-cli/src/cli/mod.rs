mod commands;
mod reports;

use clap::Parser;
use nanotox_core::domain::NanotoxError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_nanotox_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            if let Some(summary_line) = diagnostic.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("nanotox-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "nanotox-rs",
    about = "Nanoparticle charge balancing and volume estimation engine"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Resolve one formula: charge assignment and volume breakdown
    Resolve(commands::ResolveArgs),
    /// Compute per-record volume and amount descriptors for a records file
    Volumes(commands::VolumesArgs),
    /// Generate SDEC fingerprint vectors for a records file
    Fingerprint(commands::FingerprintArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Resolve(args) => commands::run_resolve_command(args),
        CliCommand::Volumes(args) => commands::run_volumes_command(args),
        CliCommand::Fingerprint(args) => commands::run_fingerprint_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(NanotoxError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_nanotox_error(&self) -> NanotoxError {
        match self {
            Self::Usage(message) => NanotoxError::invalid_record(message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => NanotoxError::internal(format!("{error:#}")),
        }
    }
}
