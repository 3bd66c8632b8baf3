//! Client-side identifiers for new web apps.
//!
//! Ids are short non-cryptographic random tokens: 8 characters drawn from the base-20
//! alphabet `0-9a-j`.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghij";
pub const ID_LENGTH: usize = 8;

/// Generates a fresh random id.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates an id for which `is_taken` returns `false`.
pub fn generate_unique_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id();
        if !is_taken(&id) {
            return id;
        }
    }
}
