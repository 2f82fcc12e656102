//! Random sampling primitives shared by all generators.
//!
//! Generators never touch an RNG directly; they draw through [`Sampler`],
//! so tests can inject a fixed-seed [`StdSampler`] and get reproducible
//! records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DrillError, DrillResult};

/// Source of random draws.
///
/// Implementors supply the three primitive draws; the composite draws
/// (fixed-precision floats, picks) are derived from them.
pub trait Sampler {
    /// Uniform integer in `[min, max]` inclusive.
    fn uniform_int(&mut self, min: i64, max: i64) -> DrillResult<i64>;

    /// `true` with probability `percent_true / 100`. Percentages outside
    /// 0-100 are clamped.
    fn weighted_bool(&mut self, percent_true: f64) -> bool;

    /// `count` distinct indices in `0..len`, in arbitrary order.
    fn distinct_indices(&mut self, len: usize, count: usize) -> DrillResult<Vec<usize>>;

    /// Uniform decimal in `[min, max]` with exactly `decimals` fractional
    /// digits.
    ///
    /// Draws a whole number of `10^-decimals` steps between the rounded-in
    /// bounds (see [`decimal_steps`]), so the result never lands outside the
    /// range after rounding.
    fn uniform_float(&mut self, min: f64, max: f64, decimals: u32) -> DrillResult<f64> {
        let (lo, hi) = decimal_steps(min, max, decimals)?;
        let steps = self.uniform_int(lo, hi)?;
        Ok((steps as f64 / scale(decimals)).clamp(min, max))
    }

    /// One element chosen uniformly.
    fn pick_one<'a, T>(&mut self, pool: &'a [T]) -> DrillResult<&'a T> {
        if pool.is_empty() {
            return Err(DrillError::EmptyPool);
        }
        let index = self.uniform_int(0, pool.len() as i64 - 1)?;
        Ok(&pool[index as usize])
    }

    /// `count` distinct elements chosen without replacement.
    fn pick_set<'a, T>(&mut self, pool: &'a [T], count: usize) -> DrillResult<Vec<&'a T>> {
        if count > pool.len() {
            return Err(DrillError::InsufficientPool {
                requested: count,
                available: pool.len(),
            });
        }
        Ok(self
            .distinct_indices(pool.len(), count)?
            .into_iter()
            .map(|i| &pool[i])
            .collect())
    }
}

/// Tolerance for treating a scaled bound as a whole number of steps.
const STEP_EPSILON: f64 = 1e-9;

fn scale(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

/// First and last whole `10^-decimals` step inside `[min, max]`.
///
/// Scaled bounds within [`STEP_EPSILON`] of an integer snap to it, so a
/// bound such as `1.1` (which scales to `110.00000000000001`) still counts
/// as a reachable value.
pub fn decimal_steps(min: f64, max: f64, decimals: u32) -> DrillResult<(i64, i64)> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(DrillError::InvalidRange { min, max });
    }
    let scale = scale(decimals);
    let snap = |x: f64, round: fn(f64) -> f64| {
        if (x - x.round()).abs() < STEP_EPSILON {
            x.round()
        } else {
            round(x)
        }
    };
    let lo = snap(min * scale, f64::ceil) as i64;
    let hi = snap(max * scale, f64::floor) as i64;
    if lo > hi {
        return Err(DrillError::NoValueAtPrecision { min, max, decimals });
    }
    Ok((lo, hi))
}

/// [`Sampler`] backed by the standard seedable RNG.
#[derive(Debug, Clone)]
pub struct StdSampler {
    rng: StdRng,
}

impl StdSampler {
    /// A sampler with a fixed seed. Equal seeds give equal draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A sampler seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Sampler for StdSampler {
    fn uniform_int(&mut self, min: i64, max: i64) -> DrillResult<i64> {
        if min > max {
            return Err(DrillError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        Ok(self.rng.random_range(min..=max))
    }

    fn weighted_bool(&mut self, percent_true: f64) -> bool {
        let p = if percent_true.is_nan() {
            0.0
        } else {
            percent_true.clamp(0.0, 100.0) / 100.0
        };
        self.rng.random_bool(p)
    }

    fn distinct_indices(&mut self, len: usize, count: usize) -> DrillResult<Vec<usize>> {
        if count > len {
            return Err(DrillError::InsufficientPool {
                requested: count,
                available: len,
            });
        }
        Ok(rand::seq::index::sample(&mut self.rng, len, count).into_vec())
    }
}
