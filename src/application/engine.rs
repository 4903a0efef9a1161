use crate::domain::catalog::{Coin, MenuItem, REJECTED_COIN_LABEL};
use crate::domain::money::Money;
use crate::domain::transaction::{InputKind, OutcomeEvent, TransactionState, Transition};

const CANCEL_KEYWORD: &str = "cancel";
const TERMINATE_KEYWORD: &str = "terminate";

/// The vending machine's transaction rules.
///
/// `TransactionEngine` holds no mutable state: the host keeps the current
/// `TransactionState` and feeds it back in with every input.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionEngine;

impl TransactionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a raw input token.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Every string maps to exactly one kind.
    pub fn classify(&self, raw: &str, state: &TransactionState) -> InputKind {
        let token = raw.trim();

        if let Some(item) = MenuItem::from_letter(token) {
            return if item.is_affordable(state.balance) {
                InputKind::MenuSelection(item)
            } else {
                InputKind::MenuSelectionLocked(item)
            };
        }
        if let Some(coin) = Coin::from_label(token) {
            return InputKind::CoinInsert(coin);
        }
        if token.eq_ignore_ascii_case(REJECTED_COIN_LABEL) {
            InputKind::RejectedCoin(raw.to_string())
        } else if token.eq_ignore_ascii_case(CANCEL_KEYWORD) {
            InputKind::Cancel
        } else if token.eq_ignore_ascii_case(TERMINATE_KEYWORD) {
            InputKind::Terminate
        } else {
            InputKind::Unrecognized(raw.to_string())
        }
    }

    /// Applies a classified input to `state`.
    pub fn apply(&self, state: TransactionState, kind: InputKind) -> Transition {
        match kind {
            InputKind::MenuSelection(item) => match state.balance.checked_sub(item.price()) {
                Some(remaining) => {
                    let mut events = vec![OutcomeEvent::ItemDispensed { item }];
                    let state = Self::end_transaction(remaining, &mut events);
                    Transition {
                        state,
                        events,
                        continue_transaction: false,
                        continue_app: true,
                    }
                }
                // Only reachable if the balance changed after classification.
                None => Transition::proceed(state, OutcomeEvent::NotEnoughCoins),
            },
            InputKind::MenuSelectionLocked(_) => {
                Transition::proceed(state, OutcomeEvent::NotEnoughCoins)
            }
            InputKind::CoinInsert(coin) => {
                let balance = state.balance + coin.value();
                Transition::proceed(
                    TransactionState::with_balance(balance),
                    OutcomeEvent::CoinAccepted { coin, balance },
                )
            }
            InputKind::RejectedCoin(input) => {
                Transition::proceed(state, OutcomeEvent::CoinRejected { input })
            }
            InputKind::Cancel => {
                let mut events = Vec::new();
                let state = Self::end_transaction(state.balance, &mut events);
                Transition {
                    state,
                    events,
                    continue_transaction: false,
                    continue_app: true,
                }
            }
            InputKind::Terminate => {
                let mut events = vec![OutcomeEvent::Terminating];
                let state = Self::end_transaction(state.balance, &mut events);
                Transition {
                    state,
                    events,
                    continue_transaction: false,
                    continue_app: false,
                }
            }
            InputKind::Unrecognized(input) => {
                Transition::proceed(state, OutcomeEvent::InvalidInput { input })
            }
        }
    }

    /// Menu items the given balance can currently buy, in letter order.
    pub fn purchasable_items(&self, balance: Money) -> Vec<MenuItem> {
        MenuItem::ALL
            .into_iter()
            .filter(|item| item.is_affordable(balance))
            .collect()
    }

    /// Returns any leftover balance and closes the transaction.
    fn end_transaction(balance: Money, events: &mut Vec<OutcomeEvent>) -> TransactionState {
        if balance.is_positive() {
            events.push(OutcomeEvent::ChangeReturned { amount: balance });
        }
        events.push(OutcomeEvent::TransactionEnded);
        TransactionState::default()
    }
}
