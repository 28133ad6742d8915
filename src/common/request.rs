use serde::Deserialize;

/// An incoming transaction request, exactly as a form or transport hands it
/// over: all fields raw strings, nothing trusted yet. The gateway owns
/// turning this into validated values.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    pub card_number: String,
    pub pin: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TransactionRequest {
    pub fn new(
        card_number: impl Into<String>,
        pin: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            pin: pin.into(),
            amount: amount.into(),
            kind: kind.into(),
        }
    }
}
