//! Deterministic per-table RNG.
//!
//! # Determinism strategy
//!
//! Each generated table gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (table_tag * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads the small tag values uniformly across the seed space.
//! This means:
//!
//! - Tables never share RNG state, so the meter table does not shift when
//!   the permit generator draws more or fewer values.
//! - The same global seed always reproduces every table exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Which generated table an RNG stream belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TableTag {
    Facilities = 1,
    Meters     = 2,
    Permits    = 3,
}

/// Deterministic RNG for one generated table.
///
/// Used only during single-threaded startup generation.
pub struct TableRng(SmallRng);

impl TableRng {
    /// Seed deterministically from the run's global seed and a table tag.
    pub fn new(global_seed: u64, table: TableTag) -> Self {
        let seed = global_seed ^ (table as u64).wrapping_mul(MIXING_CONSTANT);
        TableRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty.  Generator configs are validated before
    /// any range reaches this call.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniformly pick one element of a non-empty array.
    #[inline]
    pub fn pick<T: Copy, const N: usize>(&mut self, items: &[T; N]) -> T {
        const { assert!(N > 0, "pick from an empty array") };
        items[self.0.gen_range(0..N)]
    }

    /// Pick one element with probability proportional to its weight.
    ///
    /// Weights need not sum to 1.  If every weight is zero the first element
    /// is returned.
    pub fn pick_weighted<T: Copy, const N: usize>(&mut self, items: &[(T, f64); N]) -> T {
        const { assert!(N > 0, "pick from an empty array") };
        let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return items[0].0;
        }
        let mut draw = self.0.r#gen::<f64>() * total;
        for &(item, weight) in items {
            let weight = weight.max(0.0);
            if draw < weight {
                return item;
            }
            draw -= weight;
        }
        // Floating-point residue lands on the last positive-weight entry.
        items
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map_or(items[0].0, |&(item, _)| item)
    }
}
