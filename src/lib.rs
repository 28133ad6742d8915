//! A two-system card transaction demo: a routing gateway in front of an
//! in-memory core ledger.
//!
//! The [`gateway::Gateway`] validates and routes incoming requests by card
//! range; the [`domain::ledger::Ledger`] owns the cards and the append-only
//! transaction log and performs PIN checks, balance rules, and the actual
//! balance mutation. Everything is in-process and request-driven; whatever
//! transport sits on top (HTTP, CLI, a UI) is the integrator's concern.

pub mod common;
pub mod domain;
pub mod gateway;
pub mod io;
