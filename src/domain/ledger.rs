use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::common::error::CoreError;
use crate::common::money::Money;
use crate::common::pin;
use crate::domain::card::{Card, CARD_NUMBER_LEN, ROUTING_PREFIX};
use crate::domain::transaction::{Decline, LogEntry, TxKind, TxStatus};

const MAX_GENERATION_ATTEMPTS: u32 = 16;
const SUCCESS_REASON: &str = "processed successfully";

/// The authoritative store: every card and every processing attempt lives
/// here, and balance mutation happens nowhere else. One instance per
/// process or test; callers hold it and lend it to the gateway per call.
#[derive(Debug, Default)]
pub struct Ledger {
    cards: HashMap<String, Card>,
    // Append-only, in arrival order; read APIs reverse to newest-first.
    log: Vec<LogEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the two demo cards: one in the routed range,
    /// one outside it. Both use PIN 1234.
    pub fn with_demo_cards() -> Self {
        let mut ledger = Self::new();
        for (number, holder, cents) in [
            ("4123456789012345", "John Doe", 100_000),
            ("5123456789012345", "Jane Smith", 50_000),
        ] {
            let mut card = Card::new(number.to_owned(), holder.to_owned(), pin::digest("1234"));
            card.balance = Money::from_cents(cents);
            ledger.cards.insert(number.to_owned(), card);
        }
        ledger
    }

    /// Issues a new card: fresh unique number in the routed range, PIN
    /// digest stored, balance zero. Returns the issued card so the caller
    /// can show the holder their number.
    pub fn register_card(&mut self, holder_name: &str, pin: &str) -> Result<Card, CoreError> {
        self.register_card_with(&mut rand::thread_rng(), holder_name, pin)
    }

    fn register_card_with<R: Rng>(
        &mut self,
        rng: &mut R,
        holder_name: &str,
        pin_code: &str,
    ) -> Result<Card, CoreError> {
        let holder_name = holder_name.trim();
        if holder_name.is_empty() {
            return Err(CoreError::Validation("holder name must not be empty".to_owned()));
        }
        if !pin::is_well_formed(pin_code) {
            return Err(CoreError::Validation(format!(
                "PIN must be exactly {} numeric digits",
                pin::PIN_LENGTH
            )));
        }

        let card_number = self.allocate_card_number(rng)?;
        let card = Card::new(card_number, holder_name.to_owned(), pin::digest(pin_code));
        tracing::info!(card_number = %card.card_number, holder = %card.holder_name, "card issued");
        self.cards.insert(card.card_number.clone(), card.clone());
        Ok(card)
    }

    // Bounded retry: the number space is huge, so a collision streak this
    // long means the generator is broken, not unlucky.
    fn allocate_card_number<R: Rng>(&self, rng: &mut R) -> Result<String, CoreError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = generate_card_number(rng);
            if !self.cards.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
        Err(CoreError::Generation {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    pub fn find_card(&self, card_number: &str) -> Option<&Card> {
        self.cards.get(card_number)
    }

    /// Login check: the card, if it exists and the PIN digest matches.
    pub fn authenticate(&self, card_number: &str, pin_code: &str) -> Option<&Card> {
        self.find_card(card_number)
            .filter(|card| card.verify_pin(pin_code))
    }

    /// Runs one transaction attempt to completion: lookup, PIN check,
    /// balance rule, mutation. Every attempt admitted here lands in the log
    /// exactly once, declined or not, and declined attempts never mutate a
    /// balance.
    ///
    /// A non-positive amount is a caller contract violation (the gateway
    /// validates it), not an attempt, so it is rejected without logging.
    pub fn process_transaction(
        &mut self,
        card_number: &str,
        pin_code: &str,
        amount: Money,
        kind: TxKind,
    ) -> Result<LogEntry, CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::Validation("amount must be positive".to_owned()));
        }

        let outcome = match self.cards.get_mut(card_number) {
            None => Err(Decline::UnknownCard),
            Some(card) if !card.verify_pin(pin_code) => Err(Decline::BadPin),
            Some(card) => match kind {
                TxKind::Withdraw if amount > card.balance => Err(Decline::InsufficientBalance),
                TxKind::Withdraw => {
                    card.balance -= amount;
                    Ok(())
                }
                TxKind::Topup => {
                    card.balance += amount;
                    Ok(())
                }
            },
        };

        let entry = match outcome {
            Ok(()) => {
                tracing::info!(card = %card_number, %kind, %amount, "transaction processed");
                self.record(card_number, kind, amount, TxStatus::Success, SUCCESS_REASON)
            }
            Err(decline) => {
                tracing::warn!(card = %card_number, %kind, reason = decline.reason(), "transaction declined");
                self.record(card_number, kind, amount, TxStatus::Failed, decline.reason())
            }
        };
        Ok(entry)
    }

    fn record(
        &mut self,
        card_number: &str,
        kind: TxKind,
        amount: Money,
        status: TxStatus,
        reason: &str,
    ) -> LogEntry {
        let entry = LogEntry {
            id: Uuid::new_v4(),
            card_number: card_number.to_owned(),
            kind,
            amount,
            timestamp: Utc::now(),
            status,
            reason: reason.to_owned(),
        };
        self.log.push(entry.clone());
        entry
    }

    /// Full history, newest first. Privileged view.
    pub fn all_transactions(&self) -> Vec<&LogEntry> {
        self.log.iter().rev().collect()
    }

    /// One card's history, newest first.
    pub fn transactions_for(&self, card_number: &str) -> Vec<&LogEntry> {
        self.log
            .iter()
            .rev()
            .filter(|entry| entry.card_number == card_number)
            .collect()
    }
}

fn generate_card_number<R: Rng>(rng: &mut R) -> String {
    let mut number = String::with_capacity(CARD_NUMBER_LEN);
    number.push(ROUTING_PREFIX);
    for _ in 1..CARD_NUMBER_LEN {
        number.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    number
}
