//! Command-line entry point for the payslip engine.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use payslip_engine::error::EngineResult;
use payslip_engine::pipeline::generate_payslips;

/// Compute gross income, tax and net pay from a timesheet CSV file.
///
/// Rows belonging to the same employee are merged into one pay record, taxed
/// under the resident or working holiday schedule, and written to a payslip
/// CSV file.
#[derive(Parser, Debug)]
#[command(name = "payslip-engine")]
#[command(version, about)]
struct Args {
    /// Path to the timesheet CSV file
    input: PathBuf,

    /// Path for the payslip CSV output; defaults to a timestamped file in
    /// the working directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress the per-employee payslip blocks on stdout
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn run(args: &Args) -> EngineResult<()> {
    let output = args.output.clone().unwrap_or_else(|| {
        let timestamp = Local::now().format("%Y-%m-%d_%H_%M_%S");
        PathBuf::from(format!("payslips-{timestamp}.csv"))
    });

    let report = generate_payslips(&args.input, &output)?;

    if !args.quiet {
        for record in report.records.values() {
            println!("{}", record.describe()?);
        }
    }
    println!(
        "Wrote {} payslips to {} ({} rows merged, {} skipped)",
        report.records.len(),
        output.display(),
        report.rows_ingested,
        report.rows_skipped
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "payslip run failed");
            ExitCode::FAILURE
        }
    }
}
