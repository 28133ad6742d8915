/// Faults raised by the core ledger itself. Declined transactions are not
/// errors: they come back as failed log entries.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("card number allocation exhausted after {attempts} attempts")]
    Generation { attempts: u32 },
}

/// Rejections produced by the gateway before any ledger call, plus the
/// catch-all for a core fault surfaced while forwarding.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GatewayError {
    #[error("missing required fields")]
    MissingFields,
    #[error("amount must be positive")]
    AmountNotPositive,
    #[error("invalid transaction type")]
    InvalidKind,
    #[error("account range not supported")]
    RangeNotSupported,
    #[error("core system communication failure")]
    Upstream,
}
