//! Record identifier generation.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a generated record identifier.
pub const RECORD_ID_LEN: usize = 9;

/// Generates a random lowercase base-36 record identifier.
pub fn new_record_id() -> String {
    let mut rng = rand::rng();
    (0..RECORD_ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
