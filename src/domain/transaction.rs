use super::catalog::{Coin, MenuItem};
use super::money::Money;
use serde::Serialize;

/// The state of the transaction in progress.
///
/// A fresh transaction starts from `TransactionState::default()` with a zero
/// balance. The engine never mutates a state in place; it returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TransactionState {
    pub balance: Money,
}

impl TransactionState {
    pub fn with_balance(balance: Money) -> Self {
        Self { balance }
    }
}

/// What a raw input token means given the current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    MenuSelection(MenuItem),
    MenuSelectionLocked(MenuItem),
    CoinInsert(Coin),
    RejectedCoin(String),
    Cancel,
    Terminate,
    Unrecognized(String),
}

/// Something that happened while applying an input, for the host to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OutcomeEvent {
    CoinAccepted { coin: Coin, balance: Money },
    CoinRejected { input: String },
    ItemDispensed { item: MenuItem },
    NotEnoughCoins,
    ChangeReturned { amount: Money },
    InvalidInput { input: String },
    Terminating,
    TransactionEnded,
}

/// Result of applying one input to a `TransactionState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TransactionState,
    pub events: Vec<OutcomeEvent>,
    pub continue_transaction: bool,
    pub continue_app: bool,
}

impl Transition {
    /// The transaction carries on with `state`.
    pub fn proceed(state: TransactionState, event: OutcomeEvent) -> Self {
        Self {
            state,
            events: vec![event],
            continue_transaction: true,
            continue_app: true,
        }
    }

    /// Change returned by this transition, if any.
    pub fn change_returned(&self) -> Option<Money> {
        self.events.iter().find_map(|event| match event {
            OutcomeEvent::ChangeReturned { amount } => Some(*amount),
            _ => None,
        })
    }

    /// Item dispensed by this transition, if any.
    pub fn dispensed(&self) -> Option<MenuItem> {
        self.events.iter().find_map(|event| match event {
            OutcomeEvent::ItemDispensed { item } => Some(*item),
            _ => None,
        })
    }
}
