use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Samples scraped from one job output log
///
/// The benchmark prints one `Execution time` and one `megaflops` line per
/// repeat, so both lists usually have the same length, but nothing here
/// depends on that.
#[derive(Debug, Default)]
pub struct LogSamples {
    pub times: Vec<f64>,
    pub mflops: Vec<f64>,
}

/// Scan one job log for `megaflops` and `Execution time` lines
///
/// The `megaflops` marker takes priority if a line somehow contains both.
pub fn scan_log(path: &Path) -> Result<LogSamples> {
    info!("Scanning job log {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Can't open job log {}", path.display()))?;

    let mut samples = LogSamples::default();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("Can't read job log {}", path.display()))?;
        if line.contains("megaflops") {
            let value = metric_value(&line)
                .with_context(|| format!("{}:{}", path.display(), index + 1))?;
            samples.mflops.push(value);
        } else if line.contains("Execution time") {
            let value = metric_value(&line)
                .with_context(|| format!("{}:{}", path.display(), index + 1))?;
            samples.times.push(value);
        }
    }

    Ok(samples)
}

/// The metric value is the field after the last colon on the line, or the
/// whole line when there is no colon
fn metric_value(line: &str) -> Result<f64> {
    let field = match line.rsplit_once(':') {
        Some((_, after)) => after,
        None => line,
    }
    .trim();
    field
        .parse::<f64>()
        .with_context(|| format!("Malformed metric field {field:?} in line {line:?}"))
}
