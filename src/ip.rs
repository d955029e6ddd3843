//! Deterministic pseudo-random IPv4 strings.
//!
//! The same seed always gives the same address within one build of this
//! crate. Output is not meant to match any other language's RNG.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a dotted-quad string from `seed`.
///
/// ```
/// let a = temalib::deterministic_ip("alice");
/// assert_eq!(a, temalib::deterministic_ip("alice"));
/// assert_eq!(a.split('.').count(), 4);
/// ```
pub fn deterministic_ip(seed: &str) -> String {
    let mut rng = StdRng::seed_from_u64(seed_value(seed));
    ip_with_rng(&mut rng)
}

/// Draw four octets from `rng` and format them as `a.b.c.d`.
pub fn ip_with_rng<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = [
        rng.random_range(0..=255),
        rng.random_range(0..=255),
        rng.random_range(0..=255),
        rng.random_range(0..=255),
    ];
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

// `DefaultHasher::new()` uses fixed keys, so this is stable for a given
// toolchain.
fn seed_value(seed: &str) -> u64 {
    let mut h = DefaultHasher::new();
    seed.hash(&mut h);
    h.finish()
}
