use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::loadleveler::script::Template;
use crate::loadleveler::{script, submit};
use crate::report::summary::SummaryRow;
use crate::report::{parse, summary};
use crate::sweep::RunId;

mod loadleveler;
mod report;
mod sweep;

/// Directory holding the job output logs from a finished sweep
pub struct WorkingDirectory {
    pub path: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "heatsweep")]
#[command(about = "Submit an OpenMP thread sweep to LoadLeveler and summarise its job logs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one submission file per thread count and pass each to llsubmit
    Submit {
        /// Name for this sweep, embedded in the job log file names
        run_id: String,
        /// LoadLeveler submission template with marker lines to rewrite
        #[arg(long, default_value = "runHEAT.scp")]
        template: PathBuf,
        /// Write the submission files but don't run llsubmit
        #[arg(long)]
        dry_run: bool,
    },
    /// Print mean and standard deviation of execution time and megaflops per thread count
    Report {
        /// Name of the sweep to summarise
        run_id: String,
        /// Directory containing the job output logs
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Also write the summary table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    info!("heatsweep starting up");

    let args = Args::parse();
    match args.command {
        Command::Submit { run_id, template, dry_run } => {
            submit_sweep(&RunId::new(run_id), &template, dry_run)
        }
        Command::Report { run_id, dir, csv } => {
            let wd = WorkingDirectory { path: dir };
            report_sweep(&RunId::new(run_id), &wd, csv.as_deref())
        }
    }
}

/// Render and submit a job for every thread count in the sweep
fn submit_sweep(run: &RunId, template_path: &Path, dry_run: bool) -> Result<()> {
    let template = Template::read(template_path)?;

    for threads in sweep::THREAD_COUNTS {
        let job = script::write_script(&template, run, threads)?;
        if dry_run {
            info!("--dry-run set, not submitting {}", job.path.display());
            continue;
        }
        let reply = submit::llsubmit(&job)?;
        info!("LoadLeveler reply: {reply}");
    }

    Ok(())
}

/// Scrape every job log in the sweep and print the summary table
fn report_sweep(run: &RunId, wd: &WorkingDirectory, csv: Option<&Path>) -> Result<()> {
    let mut rows: Vec<SummaryRow> = Vec::new();
    for threads in sweep::THREAD_COUNTS {
        let log_path = wd.path.join(run.log_name(threads));
        let samples = parse::scan_log(&log_path)?;
        rows.push(SummaryRow::from_samples(threads, &samples));
    }

    summary::print_table(&rows);
    if let Some(out_path) = csv {
        summary::write_csv(&rows, out_path)?;
    }

    Ok(())
}
