//! Core logic for a parallel multiplicative persistence search.
//!
//! Multiplicative persistence is the number of times the decimal digits
//! of a number must be multiplied together, repeating on each product,
//! until a single digit remains. This crate scans a bounded space of
//! candidate numbers for unusually high step counts. Candidates are
//! described as digit-count compositions over {2, 3, 7, 8, 9} and
//! enumerated without ever building their (potentially hundreds of
//! digits long) decimal literals; each one's persistence is computed with
//! exact big-integer arithmetic against a precomputed power table. The
//! outer enumeration dimension is partitioned across worker threads that
//! share nothing mutable but the report sink.

pub mod composition;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod power;
pub mod report;
pub mod scan;

pub use composition::{Composition, CompositionEnumerator};
pub use config::{Config, DEFAULT_MAX_SIZE, DEFAULT_THRESHOLD};
pub use error::SearchError;
pub use evaluate::Evaluator;
pub use power::PowerTable;
pub use report::{Reporter, BANNER};
pub use scan::{partition, scan};
