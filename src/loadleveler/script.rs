use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::sweep::{self, RunId};

/// A ScriptPath is the path to a rendered submission file that's handed to
/// LoadLeveler via llsubmit
pub struct ScriptPath {
    pub path: PathBuf,
}

/// A submission template, read once before the sweep starts
///
/// Four marker lines are rewritten per thread count:
/// - `job_name` -> the thread count is appended to the job name
/// - `output` -> job log path for this thread count
/// - `error` -> same log path (stderr and stdout share one file)
/// - `OMP` -> `export OMP_NUM_THREADS=<threads>`
///
/// Markers are matched by substring, first match wins, so a line naming the
/// job never falls through to the `output` rule. Every other line is copied
/// verbatim.
#[derive(Debug)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    pub fn read(path: &Path) -> Result<Template> {
        info!("Reading submission template {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Can't read submission template {}", path.display()))?;
        let lines = text.lines().map(str::to_string).collect();
        Ok(Template { lines })
    }

    /// Render the submission file content for one thread count
    pub fn render(&self, threads: u32, log_name: &str) -> String {
        let mut content = String::new();
        for line in &self.lines {
            let rendered = if line.contains("job_name") {
                format!("{line}{threads}")
            } else if line.contains("output") {
                format!("#@ output = {log_name}")
            } else if line.contains("error") {
                format!("#@ error = {log_name}")
            } else if line.contains("OMP") {
                format!("export OMP_NUM_THREADS={threads}")
            } else {
                line.clone()
            };
            content.push_str(&rendered);
            content.push('\n');
        }
        content
    }
}

/// Write the rendered submission file for one thread count to the working
/// directory
pub fn write_script(template: &Template, run: &RunId, threads: u32) -> Result<ScriptPath> {
    let path = PathBuf::from(sweep::script_name(threads));
    let content = template.render(threads, &run.log_name(threads));

    info!("Writing submission file {}", path.display());
    fs::write(&path, content)
        .with_context(|| format!("Can't write submission file {}", path.display()))?;

    Ok(ScriptPath { path })
}
