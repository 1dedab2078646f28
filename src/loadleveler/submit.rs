use std::process::Command;

use anyhow::{bail, Context, Result};
use log::info;

use crate::loadleveler::script::ScriptPath;

/// Submit one rendered submission file with llsubmit
///
/// Returns the scheduler's stdout, which carries the job id line.
pub fn llsubmit(job: &ScriptPath) -> Result<String> {
    let mut llsubmit = Command::new("llsubmit");
    let cmd = llsubmit.arg(&job.path);
    info!("Running llsubmit process");
    info!("{:?}", &cmd);

    let output = cmd
        .output()
        .with_context(|| format!("Can't run llsubmit on {}", job.path.display()))?;

    if !output.status.success() {
        bail!(
            "llsubmit failed for {} with {}: {}",
            job.path.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
