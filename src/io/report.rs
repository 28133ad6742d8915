use std::io::Write;

use crate::domain::transaction::{LogEntry, TxStatus};

#[derive(serde::Serialize)]
/// CSV output row for one log entry. Headers written (in this order):
/// `id,card_number,type,amount,timestamp,status,reason`. Amounts carry two
/// decimal places; timestamps are RFC 3339.
struct LogRow<'a> {
    id: String,
    card_number: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    amount: String,
    timestamp: String,
    status: &'static str,
    reason: &'a str,
}

/// Writes the audit log to a CSV writer, in the order given (the ledger's
/// queries already hand entries over newest-first).
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
pub fn write_transaction_log<W: Write>(
    writer: W,
    entries: &[&LogEntry],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for entry in entries {
        let row = LogRow {
            id: entry.id.to_string(),
            card_number: &entry.card_number,
            kind: entry.kind.as_str(),
            amount: entry.amount.to_string_2dp(),
            timestamp: entry.timestamp.to_rfc3339(),
            status: entry.status.as_str(),
            reason: &entry.reason,
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Headline monitoring figures over a set of log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl LogSummary {
    pub fn from_entries(entries: &[&LogEntry]) -> Self {
        let succeeded = entries
            .iter()
            .filter(|entry| entry.status == TxStatus::Success)
            .count();
        Self {
            total: entries.len(),
            succeeded,
            failed: entries.len() - succeeded,
        }
    }

    /// Share of successful attempts as a percentage; zero for an empty log.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.total as f64 * 100.0
    }
}
