use crate::error::{NameError, Result};
use crate::words::{ADJECTIVES, SURNAMES};
use rand::Rng;
use std::collections::HashSet;

/// Separator between the adjective and the surname.
pub const SEPARATOR: char = '_';

// Highest numeric suffix tried before giving up on a saturated namespace.
const MAX_DISAMBIGUATOR: u32 = 9999;

/// Source of uniform random indices. Injected into the generator so tests
/// can script an exact sequence of draws.
pub trait IndexSource {
    /// Return a uniform index in `0..bound`. `bound` is always >= 1.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Adapter putting any `rand` RNG behind [`IndexSource`].
pub struct RngIndexSource<R: Rng>(pub R);

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Generate a name like "happy_turing" that is not in `used`, drawing from
/// the thread-local RNG.
///
/// See [`generate_name_with`] for the full contract.
pub fn generate_name(used: &HashSet<String>, attempt_budget: u32) -> Result<String> {
    let mut source = RngIndexSource(rand::thread_rng());
    generate_name_with(used, attempt_budget, &mut source)
}

/// Generate a name absent from `used`, drawing indices from `source`.
///
/// Draws a uniform adjective and surname up to `attempt_budget` times and
/// returns the first composition not present in `used`. If every draw
/// collides, a numeric suffix (starting at 2) is appended to the last-drawn
/// candidate until a free name is found. The caller owns `used`: insert the
/// returned name before the next call if uniqueness across calls matters.
///
/// # Errors
///
/// `InvalidArgument` if `attempt_budget` is zero. `ExhaustedPool` if `used`
/// already holds every combination reachable from the last draw, suffixes
/// included.
pub fn generate_name_with<S: IndexSource>(
    used: &HashSet<String>,
    attempt_budget: u32,
    source: &mut S,
) -> Result<String> {
    if attempt_budget == 0 {
        return Err(NameError::InvalidArgument("attempt budget must be at least 1"));
    }

    let mut candidate = String::new();
    for _ in 0..attempt_budget {
        let adjective = ADJECTIVES[source.pick(ADJECTIVES.len())];
        let surname = SURNAMES[source.pick(SURNAMES.len())];
        candidate = format!("{}{}{}", adjective, SEPARATOR, surname);
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }

    // Every draw collided: disambiguate the last candidate with a suffix.
    for suffix in 2..=MAX_DISAMBIGUATOR {
        let fallback = format!("{}{}", candidate, suffix);
        if !used.contains(&fallback) {
            return Ok(fallback);
        }
    }

    Err(NameError::ExhaustedPool)
}
