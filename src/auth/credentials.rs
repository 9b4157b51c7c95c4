//! Salted SHA-256 password digests.

use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

pub fn generate_salt() -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    to_hex(&salt)
}

pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    let computed = hash_password(password, salt);
    if computed.len() != expected_hash.len() {
        return false;
    }
    // constant-time
    computed
        .bytes()
        .zip(expected_hash.bytes())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
