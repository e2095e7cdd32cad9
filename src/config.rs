use crate::error::SearchError;

/// Default search depth: the largest per-digit count the scan will try.
pub const DEFAULT_MAX_SIZE: u32 = 500;
/// Default significance threshold: step counts strictly above it are
/// reported verbosely.
pub const DEFAULT_THRESHOLD: u32 = 9;

/// Runtime configuration parameters for a scan.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search depth bound; packed counters and the sevens count each run
    /// over `0..=max_size`.
    pub max_size: u32,
    /// Number of worker threads to partition the outer range across.
    pub workers: usize,
    /// Step count a discovery must exceed to be reported.
    pub threshold: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            workers: num_cpus::get(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.workers == 0 {
            return Err(SearchError::Config(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
