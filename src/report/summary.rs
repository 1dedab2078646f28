use std::path::Path;

use anyhow::{Context, Result};
use average::Variance;
use log::{info, warn};
use serde::Serialize;

use crate::report::parse::LogSamples;

/// One row of the summary table: statistics for a single thread count
///
/// Column names match the historical table header: m/s prefixes for mean
/// and standard deviation, time in seconds, flop in megaflops.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub thread: u32,
    pub mtime: f64,
    pub stime: f64,
    pub mflop: f64,
    pub sflop: f64,
}

impl SummaryRow {
    pub fn from_samples(thread: u32, samples: &LogSamples) -> SummaryRow {
        if samples.times.is_empty() {
            warn!("No execution time samples for {thread} threads");
        }
        if samples.mflops.is_empty() {
            warn!("No megaflops samples for {thread} threads");
        }
        let (mtime, stime) = mean_std(&samples.times);
        let (mflop, sflop) = mean_std(&samples.mflops);
        SummaryRow { thread, mtime, stime, mflop, sflop }
    }
}

/// Mean and population standard deviation (ddof = 0) of one sample list
///
/// Empty input gives NaN for both, like NumPy on an empty array.
fn mean_std(samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let stats: Variance = samples.iter().copied().collect();
    (stats.mean(), stats.population_variance().sqrt())
}

/// Print the summary table to stdout
pub fn print_table(rows: &[SummaryRow]) {
    println!("{}", header_line());
    for row in rows {
        println!("{}", row_line(row));
    }
}

fn header_line() -> String {
    format!("{:>6} {:>12} {:>12} {:>12} {:>12}", "thread", "mtime", "stime", "mflop", "sflop")
}

fn row_line(row: &SummaryRow) -> String {
    format!(
        "{:>6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
        row.thread, row.mtime, row.stime, row.mflop, row.sflop
    )
}

/// Write the summary table to a CSV file
pub fn write_csv(rows: &[SummaryRow], path: &Path) -> Result<()> {
    info!("Writing summary table to {}", path.display());
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Can't write summary to {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_repeats_have_zero_deviation() {
        let samples = LogSamples {
            times: vec![2.0, 2.0, 2.0],
            mflops: vec![100.0, 100.0, 100.0],
        };
        let row = SummaryRow::from_samples(4, &samples);
        assert_eq!(row.mtime, 2.0);
        assert_eq!(row.stime, 0.0);
        assert_eq!(row.mflop, 100.0);
        assert_eq!(row.sflop, 0.0);
    }

    #[test]
    fn deviation_is_population_not_sample() {
        // ddof = 0: sqrt(((1-2)^2 + (3-2)^2) / 2) = 1, not sqrt(2)
        let (mean, std) = mean_std(&[1.0, 3.0]);
        assert_eq!(mean, 2.0);
        assert_eq!(std, 1.0);
    }

    #[test]
    fn empty_samples_give_nan() {
        let row = SummaryRow::from_samples(48, &LogSamples::default());
        assert!(row.mtime.is_nan());
        assert!(row.stime.is_nan());
        assert!(row.mflop.is_nan());
        assert!(row.sflop.is_nan());
    }

    #[test]
    fn table_columns_line_up_with_the_header() {
        let row = SummaryRow { thread: 48, mtime: 2.0, stime: 0.1, mflop: 12345.5, sflop: 0.5 };
        let line = row_line(&row);
        assert_eq!(line.len(), header_line().len());
        assert_eq!(line, "    48     2.000000     0.100000 12345.500000     0.500000");
    }

    #[test]
    fn csv_output_has_one_record_per_thread_count() {
        let rows = vec![
            SummaryRow { thread: 1, mtime: 4.0, stime: 0.1, mflop: 50.0, sflop: 0.5 },
            SummaryRow { thread: 2, mtime: 2.0, stime: 0.1, mflop: 100.0, sflop: 0.5 },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_csv(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("thread,mtime,stime,mflop,sflop"));
        assert_eq!(lines.next(), Some("1,4.0,0.1,50.0,0.5"));
        assert_eq!(lines.next(), Some("2,2.0,0.1,100.0,0.5"));
    }
}
