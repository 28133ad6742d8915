use card_switch::common::error::GatewayError;
use card_switch::common::money::Money;
use card_switch::common::request::TransactionRequest;
use card_switch::domain::ledger::Ledger;
use card_switch::domain::session::{self, Role};
use card_switch::domain::transaction::{LogEntry, TxStatus};
use card_switch::gateway::Gateway;
use card_switch::io::report::LogSummary;

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn submit(
    gateway: &Gateway,
    ledger: &mut Ledger,
    card: &str,
    pin: &str,
    amount: &str,
    kind: &str,
) -> Result<LogEntry, GatewayError> {
    gateway.handle_transaction(ledger, &TransactionRequest::new(card, pin, amount, kind))
}

fn balance_of(ledger: &Ledger, card: &str) -> Money {
    ledger.find_card(card).expect("card exists").balance
}

#[test]
fn full_customer_lifecycle() {
    let mut ledger = Ledger::new();
    let gateway = Gateway::new();

    // open an account
    let card = ledger.register_card("Alex", "1234").expect("registration succeeds");
    assert!(card.card_number.starts_with('4'));
    assert_eq!(card.balance, money("0.00"));
    let number = card.card_number.clone();

    // fund it
    let entry = submit(&gateway, &mut ledger, &number, "1234", "100", "topup").unwrap();
    assert_eq!(entry.status, TxStatus::Success);
    assert_eq!(balance_of(&ledger, &number), money("100.00"));

    // overdraw attempt bounces, balance untouched
    let entry = submit(&gateway, &mut ledger, &number, "1234", "150", "withdraw").unwrap();
    assert_eq!(entry.status, TxStatus::Failed);
    assert_eq!(entry.reason, "insufficient balance");
    assert_eq!(balance_of(&ledger, &number), money("100.00"));

    // wrong PIN bounces, balance untouched
    let entry = submit(&gateway, &mut ledger, &number, "9999", "50", "withdraw").unwrap();
    assert_eq!(entry.status, TxStatus::Failed);
    assert_eq!(entry.reason, "invalid PIN");
    assert_eq!(balance_of(&ledger, &number), money("100.00"));

    // correct withdrawal lands
    let entry = submit(&gateway, &mut ledger, &number, "1234", "50", "withdraw").unwrap();
    assert_eq!(entry.status, TxStatus::Success);
    assert_eq!(balance_of(&ledger, &number), money("50.00"));

    // four attempts reached the core, four entries, newest first
    let history = ledger.transactions_for(&number);
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].amount, money("50.00"));
    assert!(history[0].is_success());
}

#[test]
fn out_of_range_card_never_reaches_the_ledger() {
    let mut ledger = Ledger::with_demo_cards();
    let gateway = Gateway::new();

    // valid credentials, existing card, but outside the routed range
    let err = submit(
        &gateway,
        &mut ledger,
        "5123456789012345",
        "1234",
        "10",
        "topup",
    )
    .unwrap_err();
    assert_eq!(err, GatewayError::RangeNotSupported);
    assert_eq!(err.to_string(), "account range not supported");

    assert!(ledger.all_transactions().is_empty());
    assert_eq!(balance_of(&ledger, "5123456789012345"), money("500.00"));
}

#[test]
fn gateway_rejections_leave_no_trace_in_the_log() {
    let mut ledger = Ledger::with_demo_cards();
    let gateway = Gateway::new();

    let cases = [
        ("", "1234", "10", "topup", GatewayError::MissingFields),
        ("4123456789012345", "1234", "0", "topup", GatewayError::AmountNotPositive),
        ("4123456789012345", "1234", "-1", "withdraw", GatewayError::AmountNotPositive),
        ("4123456789012345", "1234", "10", "transfer", GatewayError::InvalidKind),
        ("5123456789012345", "1234", "10", "topup", GatewayError::RangeNotSupported),
    ];
    for (card, pin, amount, kind, expected) in cases {
        let err = submit(&gateway, &mut ledger, card, pin, amount, kind).unwrap_err();
        assert_eq!(err, expected);
    }

    assert!(ledger.all_transactions().is_empty());
}

#[test]
fn every_forwarded_attempt_grows_the_log_by_one() {
    let mut ledger = Ledger::with_demo_cards();
    let gateway = Gateway::new();

    let attempts = [
        ("4123456789012345", "1234", "10", "topup"),    // success
        ("4123456789012345", "0000", "10", "withdraw"), // bad pin
        ("4999999999999999", "1234", "10", "topup"),    // unknown card
        ("4123456789012345", "1234", "5000", "withdraw"), // overdraw
    ];

    for (i, (card, pin, amount, kind)) in attempts.iter().enumerate() {
        submit(&gateway, &mut ledger, card, pin, amount, kind).unwrap();
        assert_eq!(ledger.all_transactions().len(), i + 1);
    }
}

#[test]
fn reads_are_idempotent() {
    let mut ledger = Ledger::with_demo_cards();
    let gateway = Gateway::new();

    submit(&gateway, &mut ledger, "4123456789012345", "1234", "10", "topup").unwrap();
    submit(&gateway, &mut ledger, "4123456789012345", "1234", "5", "withdraw").unwrap();

    assert_eq!(ledger.all_transactions(), ledger.all_transactions());
    assert_eq!(
        ledger.transactions_for("4123456789012345"),
        ledger.transactions_for("4123456789012345")
    );
}

#[test]
fn login_then_transact_then_review_history() {
    let mut ledger = Ledger::with_demo_cards();
    let gateway = Gateway::new();

    let session = session::login_customer(&ledger, "4123456789012345", "1234").unwrap();
    assert_eq!(session.role, Role::Customer);
    let number = session.card_number.unwrap();

    submit(&gateway, &mut ledger, &number, "1234", "200", "topup").unwrap();

    let admin = session::login_admin("admin", "admin").unwrap();
    assert_eq!(admin.role, Role::Admin);

    // the admin view sees everything; the customer view only their card
    let summary = LogSummary::from_entries(&ledger.all_transactions());
    assert_eq!(summary.total, 1);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.success_rate(), 100.0);
    assert_eq!(ledger.transactions_for(&number).len(), 1);
}
