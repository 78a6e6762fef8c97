//! Uniform random selection from the filtered candidates.

use catalog::Movie;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one candidate uniformly at random.
///
/// Returns `None` when no candidates remain — the non-fatal "nothing to
/// show" outcome, not an error. The RNG is passed in so callers can seed a
/// deterministic one in tests.
pub fn choose_uniform<'a, R: Rng + ?Sized>(
    candidates: &'a [Movie],
    rng: &mut R,
) -> Option<&'a Movie> {
    candidates.choose(rng)
}
