use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Withdraw,
    Topup,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Withdraw => "withdraw",
            TxKind::Topup => "topup",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "withdraw" => Some(TxKind::Withdraw),
            "topup" => Some(TxKind::Topup),
            _ => None,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
        }
    }
}

/// Why an attempt that reached the core was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decline {
    UnknownCard,
    BadPin,
    InsufficientBalance,
}

impl Decline {
    pub fn reason(&self) -> &'static str {
        match self {
            Decline::UnknownCard => "invalid account",
            Decline::BadPin => "invalid PIN",
            Decline::InsufficientBalance => "insufficient balance",
        }
    }
}

/// One processing attempt, successful or not. Entries are appended once and
/// never touched again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub card_number: String,
    pub kind: TxKind,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
    pub status: TxStatus,
    pub reason: String,
}

impl LogEntry {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }
}
