//! Application layer containing the vending machine's business logic.
//!
//! `TransactionEngine` holds the pure transaction rules. `VendingMachine`
//! drives it from an input source and hands every outcome to a presenter.

pub mod engine;
pub mod session;
