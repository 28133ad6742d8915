use serde::Serialize;

use crate::domain::card::Card;
use crate::domain::ledger::Ledger;

// Fixed demo credentials for the back-office view.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";
const ADMIN_DISPLAY_NAME: &str = "Super Administrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

/// What a successful login produces. Lives only for the duration of a UI
/// session; the core never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub role: Role,
    /// Set for customers, absent for admins.
    pub card_number: Option<String>,
    pub display_name: String,
}

impl Session {
    pub fn for_card(card: &Card) -> Self {
        Self {
            role: Role::Customer,
            card_number: Some(card.card_number.clone()),
            display_name: card.holder_name.clone(),
        }
    }
}

/// Customer login: card number + PIN against the ledger.
pub fn login_customer(ledger: &Ledger, card_number: &str, pin: &str) -> Option<Session> {
    let session = ledger.authenticate(card_number, pin).map(Session::for_card);
    if session.is_none() {
        tracing::warn!(card = %card_number, "customer login rejected");
    }
    session
}

/// Admin login against the fixed demo credentials.
pub fn login_admin(username: &str, password: &str) -> Option<Session> {
    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        tracing::warn!(%username, "admin login rejected");
        return None;
    }
    Some(Session {
        role: Role::Admin,
        card_number: None,
        display_name: ADMIN_DISPLAY_NAME.to_owned(),
    })
}
