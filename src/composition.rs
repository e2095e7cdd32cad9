//! Deterministic enumeration of candidate digit compositions.
//!
//! Candidates are numbers of the form `[2..2][3..3][7..7][8..8][9..9]`,
//! described only by how many of each digit they contain. Digits 4 and 6
//! are products of 2 and 3, the digit 1 never changes a product, a 0
//! collapses it outright, and a 5 overwhelmingly produces a trailing zero
//! one step later; the enumeration therefore sticks to {2, 3, 7, 8, 9}.
//! This is a scope-limiting heuristic inherited from the search this crate
//! implements, not a proof that the skipped digits cannot matter.
//!
//! Two packed counters keep the loop space compact: `packed2` splits into
//! `(eights, twos) = (packed2 / 3, packed2 % 3)` and `packed3` into
//! `(nines, threes) = (packed3 / 2, packed3 % 2)`. Walking each packed
//! counter over `0..=max_size` visits every (small, large) count pair
//! exactly once, so two loop variables cover four count dimensions; the
//! sevens count is its own innermost loop.

use std::fmt::{self, Write as _};
use std::ops::RangeInclusive;

/// Digit counts of one candidate number.
///
/// The decimal literal the counts describe can run to hundreds of digits;
/// it is only ever rendered (via `Display`) when a discovery is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Composition {
    /// Count of the digit 2, always 0..=2.
    pub twos: u32,
    /// Count of the digit 3, always 0 or 1.
    pub threes: u32,
    /// Count of the digit 7, up to the search depth.
    pub sevens: u32,
    /// Count of the digit 8, up to a third of the search depth.
    pub eights: u32,
    /// Count of the digit 9, up to half the search depth.
    pub nines: u32,
}

impl Composition {
    /// Decode a composition from its packed loop counters.
    pub fn from_packed(packed_twos: u32, packed_threes: u32, sevens: u32) -> Self {
        Self {
            twos: packed_twos % 3,
            threes: packed_threes % 2,
            sevens,
            eights: packed_twos / 3,
            nines: packed_threes / 2,
        }
    }

    /// Packed counter covering the 2 and 8 counts. Inverse of `from_packed`.
    pub fn packed_twos(&self) -> u32 {
        self.eights * 3 + self.twos
    }

    /// Packed counter covering the 3 and 9 counts. Inverse of `from_packed`.
    pub fn packed_threes(&self) -> u32 {
        self.nines * 2 + self.threes
    }

    /// Length in decimal digits of the number the counts describe.
    pub fn digit_len(&self) -> u64 {
        u64::from(self.twos)
            + u64::from(self.threes)
            + u64::from(self.sevens)
            + u64::from(self.eights)
            + u64::from(self.nines)
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [
            ('2', self.twos),
            ('3', self.threes),
            ('7', self.sevens),
            ('8', self.eights),
            ('9', self.nines),
        ];
        for (digit, count) in groups {
            for _ in 0..count {
                f.write_char(digit)?;
            }
        }
        Ok(())
    }
}

/// Lazy walk over every composition in a `packed2` sub-range.
///
/// Yields `(span) * (max_size + 1)^2` compositions in lexicographic
/// `(packed2, packed3, sevens)` order, each exactly once. The walk is not
/// restartable mid-stream; a worker that stops must be handed its exact
/// sub-range again to resume.
pub struct CompositionEnumerator {
    max_size: u32,
    packed_twos: u32,
    end: u32,
    packed_threes: u32,
    sevens: u32,
    done: bool,
}

impl CompositionEnumerator {
    /// Enumerate the given inclusive `packed2` sub-range.
    pub fn new(range: RangeInclusive<u32>, max_size: u32) -> Self {
        let (start, end) = (*range.start(), *range.end());
        Self {
            max_size,
            packed_twos: start,
            end,
            packed_threes: 0,
            sevens: 0,
            done: start > end,
        }
    }

    /// Enumerate the whole search space for the given depth.
    pub fn full(max_size: u32) -> Self {
        Self::new(0..=max_size, max_size)
    }
}

impl Iterator for CompositionEnumerator {
    type Item = Composition;

    fn next(&mut self) -> Option<Composition> {
        if self.done {
            return None;
        }
        let item = Composition::from_packed(self.packed_twos, self.packed_threes, self.sevens);

        self.sevens += 1;
        if self.sevens > self.max_size {
            self.sevens = 0;
            self.packed_threes += 1;
            if self.packed_threes > self.max_size {
                self.packed_threes = 0;
                if self.packed_twos == self.end {
                    self.done = true;
                } else {
                    self.packed_twos += 1;
                }
            }
        }
        Some(item)
    }
}
