use serde::Serialize;

use crate::common::{money::Money, pin};

/// Card numbers are fixed-length numeric strings. The first digit marks the
/// routed range: the gateway only forwards cards in this range, and all
/// newly issued cards land in it.
pub const CARD_NUMBER_LEN: usize = 16;
pub const ROUTING_PREFIX: char = '4';

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    /// Unique, assigned at issue time, never changes.
    pub card_number: String,
    /// Digest of the 4-digit PIN. The raw PIN is never stored.
    #[serde(skip_serializing)]
    pub(crate) pin_hash: String,
    /// Never negative; mutated only by the ledger's transaction processing.
    pub balance: Money,
    pub holder_name: String,
}

impl Card {
    pub fn new(card_number: String, holder_name: String, pin_hash: String) -> Self {
        Self {
            card_number,
            pin_hash,
            balance: Money::zero(),
            holder_name,
        }
    }

    pub fn verify_pin(&self, pin: &str) -> bool {
        pin::digest(pin) == self.pin_hash
    }
}
