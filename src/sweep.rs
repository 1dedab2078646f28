//! The fixed thread-count sweep shared by submission and reporting

/// OpenMP worker counts measured in one sweep
pub const THREAD_COUNTS: [u32; 9] = [1, 2, 4, 8, 12, 16, 24, 32, 48];

/// User-chosen name for one sweep
///
/// The run id ties the two subcommands together: submission writes it into
/// the job log file names, and reporting reads the same names back.
pub struct RunId {
    pub name: String,
}

impl RunId {
    pub fn new(name: String) -> RunId {
        RunId { name }
    }

    /// Job log file name for one thread count: `job_<run>_<threads>.out`
    pub fn log_name(&self, threads: u32) -> String {
        format!("job_{}_{}.out", self.name, threads)
    }
}

/// Submission file name for one thread count
pub fn script_name(threads: u32) -> String {
    format!("runHeat{threads}.scp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_names_follow_the_shared_convention() {
        let run = RunId::new("omp3".to_string());
        assert_eq!(run.log_name(8), "job_omp3_8.out");
        assert_eq!(script_name(8), "runHeat8.scp");
    }
}
