//! Precomputed powers of the digits 2 through 9.
//!
//! A persistence step multiplies `power(d, count)` for every digit value
//! present in the current representation, so the same powers are looked up
//! hundreds of millions of times during a scan. The table is built once,
//! single-threaded, before any worker starts, and is read-only afterwards;
//! sharing it by reference across threads needs no locking.

use num_bigint::BigUint;

/// Smallest digit with a row in the table.
pub const MIN_BASE: u32 = 2;
/// Largest digit with a row in the table.
pub const MAX_BASE: u32 = 9;

/// Lookup table of `base^exponent` for `base` in 2..=9.
pub struct PowerTable {
    /// Row 0 holds the powers of 2, row 7 the powers of 9.
    rows: Vec<Vec<BigUint>>,
    max_exponent: u32,
}

impl PowerTable {
    /// Build the full table for exponents `0..=max_exponent`.
    ///
    /// Each entry is raised independently rather than extending the
    /// previous one, so any single entry can be checked against a
    /// reference computation in isolation.
    pub fn build(max_exponent: u32) -> Self {
        let rows = (MIN_BASE..=MAX_BASE)
            .map(|base| {
                (0..=max_exponent)
                    .map(|exponent| BigUint::from(base).pow(exponent))
                    .collect()
            })
            .collect();
        Self { rows, max_exponent }
    }

    /// Look up `base^exponent`.
    ///
    /// `base` must be in 2..=9 and `exponent` at most the bound the table
    /// was built with; the enumerator and evaluator stay in range by
    /// construction, and a lookup outside it panics.
    pub fn power(&self, base: u32, exponent: u32) -> &BigUint {
        &self.rows[(base - MIN_BASE) as usize][exponent as usize]
    }

    /// Largest exponent this table was built for.
    pub fn max_exponent(&self) -> u32 {
        self.max_exponent
    }
}
