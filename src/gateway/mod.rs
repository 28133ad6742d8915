//! The routing façade in front of the ledger. Checks request shape and
//! range eligibility, then forwards; it never reads or writes ledger state
//! itself, and a request rejected here never reaches the transaction log.

use crate::common::error::GatewayError;
use crate::common::money::Money;
use crate::common::request::TransactionRequest;
use crate::domain::card::ROUTING_PREFIX;
use crate::domain::ledger::Ledger;
use crate::domain::transaction::{LogEntry, TxKind};

#[derive(Debug, Default)]
pub struct Gateway;

impl Gateway {
    pub fn new() -> Self {
        Self
    }

    /// Validates and routes one request. `Ok` means the ledger processed
    /// the attempt and this is its log entry, verbatim; a declined attempt
    /// is still `Ok`, with a failed entry. `Err` means the request was
    /// rejected here and the ledger was never called.
    pub fn handle_transaction(
        &self,
        ledger: &mut Ledger,
        request: &TransactionRequest,
    ) -> Result<LogEntry, GatewayError> {
        let result = self.check_and_forward(ledger, request);
        if let Err(err) = &result {
            tracing::warn!(card = %request.card_number, %err, "request rejected at gateway");
        }
        result
    }

    fn check_and_forward(
        &self,
        ledger: &mut Ledger,
        request: &TransactionRequest,
    ) -> Result<LogEntry, GatewayError> {
        let card_number = request.card_number.trim();
        let pin = request.pin.trim();
        let raw_amount = request.amount.trim();
        let raw_kind = request.kind.trim();

        if card_number.is_empty() || pin.is_empty() || raw_amount.is_empty() || raw_kind.is_empty() {
            return Err(GatewayError::MissingFields);
        }

        let amount: Money = raw_amount
            .parse()
            .map_err(|_| GatewayError::AmountNotPositive)?;
        if !amount.is_positive() {
            return Err(GatewayError::AmountNotPositive);
        }

        let kind = TxKind::parse(raw_kind).ok_or(GatewayError::InvalidKind)?;

        // Range gate: cards outside the routed range are turned away even
        // if they exist and the credentials are right.
        if !card_number.starts_with(ROUTING_PREFIX) {
            return Err(GatewayError::RangeNotSupported);
        }

        // The gateway pre-validates everything the core re-checks, so a
        // core error at this point is an upstream fault, not a rejection
        // the caller can act on.
        ledger
            .process_transaction(card_number, pin, amount, kind)
            .map_err(|err| {
                tracing::error!(%err, "core system failed to process a forwarded request");
                GatewayError::Upstream
            })
    }
}
