use rand::distributions::{Alphanumeric, DistString};
use sha256::digest;

const SALT_LENGTH: usize = 8;
const ROUNDS: u32 = 1000;

/// Hashes a password with a fresh random salt. The stored form is
/// `salt$hash`, where the hash is the iterated SHA-256 of the salted
/// input.
pub fn hash_password(plain: &str) -> String {
    let salt = Alphanumeric.sample_string(&mut rand::thread_rng(), SALT_LENGTH);

    format!("{}${}", salt, stretch(&salt, plain))
}

/// Checks a password against a stored `salt$hash` value. Malformed
/// stored values never verify.
pub fn verify_password(stored: &str, plain: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => stretch(salt, plain) == hash,
        None => false,
    }
}

fn stretch(salt: &str, plain: &str) -> String {
    let mut hashed = digest(format!("{}{}", salt, plain));
    for _ in 1..ROUNDS {
        hashed = digest(hashed);
    }

    hashed
}
