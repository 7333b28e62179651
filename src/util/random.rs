//! Random identifiers for client-side keys.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used when page scripts call `generateRandomString` without one.
pub const DEFAULT_RANDOM_LEN: usize = 8;

/// `len` characters drawn uniformly from `[A-Za-z0-9]`.
///
/// Not suitable for secrets.
#[must_use]
pub fn generate_random_string(len: usize) -> String {
    generate_random_string_with(&mut rand::rng(), len)
}

/// [`generate_random_string`] with a caller-supplied generator.
pub fn generate_random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}
