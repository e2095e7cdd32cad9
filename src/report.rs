//! Serialized report sink shared by all scan workers.
//!
//! Workers hold no shared mutable state except this sink. A discovery is
//! several lines long, so everything belonging to one report is written
//! under a single lock acquisition; lines from concurrent workers can
//! interleave between reports but never inside one.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Banner line opening each discovery report.
pub const BANNER: &str = "----------------------------------------";

/// Mutex-guarded writer handed by reference to every worker.
///
/// Generic over the sink so tests can capture output in a `Vec<u8>`; the
/// binary wraps stdout.
pub struct Reporter<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Emit a coarse progress line.
    pub fn progress(&self, percent: f32) -> io::Result<()> {
        let mut sink = self.lock();
        writeln!(sink, "Progress: {percent:.1}%")
    }

    /// Emit one discovery: banner, the full decimal literal with its step
    /// count, then the chain one value per line.
    pub fn discovery(&self, number: &str, steps: u32, chain: &[String]) -> io::Result<()> {
        let mut sink = self.lock();
        writeln!(sink, "{BANNER}")?;
        writeln!(sink, "{number} -- total steps: {steps}")?;
        for value in chain {
            writeln!(sink, "{value}")?;
        }
        Ok(())
    }

    /// Recover the sink, e.g. to inspect captured output in tests.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, W> {
        // A poisoned lock means another worker panicked; the run is
        // already failing, so keep writing rather than panic twice.
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
