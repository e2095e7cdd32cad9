//! Parallel scan of the composition space.
//!
//! The outer `packed2` dimension is split into contiguous sub-ranges, one
//! per worker thread. Workers share the power table and the report sink,
//! both by reference, and own everything else: each runs the full inner
//! enumeration over its sub-range, evaluating every composition with its
//! private scratch state. There is no cancellation path; a scan runs to
//! completion of the configured bounds or dies with the process.

use std::io::Write;
use std::ops::RangeInclusive;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::composition::CompositionEnumerator;
use crate::config::Config;
use crate::error::SearchError;
use crate::evaluate::Evaluator;
use crate::power::PowerTable;
use crate::report::Reporter;

/// Minimum pause between two progress lines.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Split `[0, max_size]` into contiguous per-worker sub-ranges.
///
/// Sub-ranges are equally sized except the last, which absorbs the
/// remainder; their union covers the interval exactly once. The worker
/// count is clamped so no range is empty. Pure function, independent of
/// any threading.
pub fn partition(max_size: u32, workers: usize) -> Vec<RangeInclusive<u32>> {
    let span = u64::from(max_size) + 1;
    let workers = (workers as u64).clamp(1, span);
    let chunk = span / workers;
    (0..workers)
        .map(|index| {
            let start = (index * chunk) as u32;
            let end = if index == workers - 1 {
                max_size
            } else {
                (index * chunk + chunk - 1) as u32
            };
            start..=end
        })
        .collect()
}

/// Run the full scan described by `config`, reporting discoveries whose
/// step count exceeds the threshold.
///
/// Spawns one OS thread per sub-range and joins them all before
/// returning; the first worker error wins. A panicking worker is not
/// supervised or restarted, it takes the scan down.
pub fn scan<W: Write + Send>(
    config: &Config,
    powers: &PowerTable,
    reporter: &Reporter<W>,
) -> Result<(), SearchError> {
    config.validate()?;
    if powers.max_exponent() < config.max_size {
        return Err(SearchError::Config(format!(
            "power table depth {} is below the search depth {}",
            powers.max_exponent(),
            config.max_size
        )));
    }

    let ranges = partition(config.max_size, config.workers);
    info!(
        "scanning depth {} across {} workers",
        config.max_size,
        ranges.len()
    );

    thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| scope.spawn(move || worker(range, config, powers, reporter)))
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        Ok(())
    })
}

fn worker<W: Write + Send>(
    range: RangeInclusive<u32>,
    config: &Config,
    powers: &PowerTable,
    reporter: &Reporter<W>,
) -> Result<(), SearchError> {
    let mut evaluator = Evaluator::new();

    // The worker owning packed2 = 0 doubles as the progress reporter; the
    // percentage covers its own sub-range only. Gated on elapsed time,
    // checked once per inner sevens sweep.
    let start = *range.start();
    let report_progress = start == 0;
    let span = (*range.end() - start).max(1) as f32;
    let mut last_progress = Instant::now();

    for composition in CompositionEnumerator::new(range.clone(), config.max_size) {
        if report_progress
            && composition.sevens == 0
            && last_progress.elapsed() >= PROGRESS_INTERVAL
        {
            let percent = (composition.packed_twos() - start) as f32 * 100.0 / span;
            reporter.progress(percent)?;
            last_progress = Instant::now();
        }

        let steps = evaluator.evaluate(&composition, powers);
        if steps > config.threshold {
            // Rare path: recompute verbosely to get the auditable chain.
            let (steps, chain) = evaluator.trace(&composition, powers);
            reporter.discovery(&composition.to_string(), steps, &chain)?;
        }
    }

    debug!("worker finished packed range {range:?}");
    Ok(())
}
