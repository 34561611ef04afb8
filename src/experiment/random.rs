//! Seeded and unseeded draws in `[0, 1)`.
//!
//! The seeded draw is a fixed linear congruential step over the character
//! codes of the seed, so a given seed maps to the same value on every
//! platform and in every release:
//!
//! ```text
//! r = ((Σ utf16(seed)) * 9301 + 49297) mod 233280 / 233280
//! ```

use rand::Rng;

const MULTIPLIER: u128 = 9301;
const INCREMENT: u128 = 49_297;
const MODULUS: u128 = 233_280;

/// Map `seed` to a reproducible value in `[0, 1)`.
///
/// Total for any string, including the empty one.
///
/// # Examples
///
/// ```rust
/// use split_testing::experiment::seeded_random;
///
/// // 'a' + 'b' + 'c' = 294 → (294 * 9301 + 49297) % 233280 = 217711
/// assert_eq!(seeded_random("abc"), 217_711.0 / 233_280.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seeded_random(seed: &str) -> f64 {
    let sum: u128 = seed.encode_utf16().map(u128::from).sum();
    let value = (sum * MULTIPLIER + INCREMENT) % MODULUS;
    value as f64 / MODULUS as f64
}

/// Draw a value in `[0, 1)`: seeded when `seed` is given, else from `rng`.
pub fn draw<R: Rng + ?Sized>(seed: Option<&str>, rng: &mut R) -> f64 {
    match seed {
        Some(seed) => seeded_random(seed),
        None => rng.gen::<f64>(),
    }
}

/// Uniform index into a collection of `len` items, or `None` when empty.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn random_index<R: Rng + ?Sized>(len: usize, seed: Option<&str>, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (draw(seed, rng) * len as f64).floor() as usize;
    Some(index.min(len - 1))
}
