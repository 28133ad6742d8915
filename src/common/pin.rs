use sha2::{Digest, Sha256};

pub const PIN_LENGTH: usize = 4;

/// One-way digest of a raw PIN, stored instead of the PIN itself.
///
/// Plain unsalted SHA-256 hex: good enough for a demo credential check,
/// not a password hash.
pub fn digest(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    hex::encode(hasher.finalize())
}

/// A PIN must be exactly four ASCII digits.
pub fn is_well_formed(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}
