use crate::application::engine::TransactionEngine;
use crate::domain::money::Money;
use crate::domain::ports::{InputSourceBox, PresenterBox};
use crate::domain::transaction::{InputKind, OutcomeEvent, TransactionState, Transition};
use crate::error::{Result, VendoError};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_READ_FAILURES: u32 = 3;

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a SessionSummary,
}

/// Totals for one run of the machine.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub transactions: u64,
    pub items_dispensed: u64,
    pub change_returned: Money,
    pub inputs_rejected: u64,
}

impl SessionSummary {
    /// Writes the summary as a single `{"summary": ...}` JSON line.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, &SummaryLine { summary: self })?;
        writeln!(writer)?;
        Ok(())
    }

    fn record(&mut self, transition: &Transition) {
        if transition.dispensed().is_some() {
            self.items_dispensed += 1;
        }
        if let Some(change) = transition.change_returned() {
            self.change_returned += change;
        }
        if !transition.continue_transaction {
            self.transactions += 1;
        }
        self.inputs_rejected += transition
            .events
            .iter()
            .filter(|event| {
                matches!(
                    event,
                    OutcomeEvent::CoinRejected { .. } | OutcomeEvent::InvalidInput { .. }
                )
            })
            .count() as u64;
    }
}

/// Drives the engine from an input source, one transaction at a time.
///
/// The outer loop runs once per transaction and the inner loop once per input.
/// Exhausted input behaves like `terminate`, so any balance is handed back.
pub struct VendingMachine {
    engine: TransactionEngine,
    input: InputSourceBox,
    presenter: PresenterBox,
    max_read_failures: u32,
}

impl VendingMachine {
    pub fn new(input: InputSourceBox, presenter: PresenterBox) -> Self {
        Self {
            engine: TransactionEngine::new(),
            input,
            presenter,
            max_read_failures: DEFAULT_MAX_READ_FAILURES,
        }
    }

    /// Sets how many consecutive read failures are tolerated before giving up.
    pub fn with_max_read_failures(mut self, max_read_failures: u32) -> Self {
        self.max_read_failures = max_read_failures.max(1);
        self
    }

    /// Runs transactions until the user terminates or the input runs out.
    pub async fn run(mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        info!("vending machine started");

        loop {
            self.presenter.heading()?;
            let mut state = TransactionState::default();

            let continue_app = loop {
                let purchasable = self.engine.purchasable_items(state.balance);
                self.presenter.prompt(&state, &purchasable)?;

                let kind = match self.read_input().await {
                    Ok(Some(raw)) => self.engine.classify(&raw, &state),
                    Ok(None) => {
                        debug!("input exhausted");
                        InputKind::Terminate
                    }
                    Err(err) => {
                        // Hand back whatever was inserted before giving up.
                        let transition = self.engine.apply(state, InputKind::Cancel);
                        self.finish(&transition, &mut summary)?;
                        return Err(err);
                    }
                };
                debug!(?kind, balance = %state.balance, "input classified");

                let transition = self.engine.apply(state, kind);
                self.finish(&transition, &mut summary)?;
                state = transition.state;

                if !transition.continue_transaction {
                    info!(transactions = summary.transactions, "transaction ended");
                    break transition.continue_app;
                }
            };

            if !continue_app {
                break;
            }
        }

        info!(
            transactions = summary.transactions,
            items = summary.items_dispensed,
            change = %summary.change_returned,
            "vending machine stopped"
        );
        Ok(summary)
    }

    /// Reads a line, prompting again after failed reads.
    ///
    /// An undecodable line has already been consumed, so it is always retried.
    /// Other I/O errors count toward the configured limit.
    async fn read_input(&mut self) -> Result<Option<String>> {
        let mut failures = 0;
        loop {
            match self.input.next_line().await {
                Ok(line) => return Ok(line),
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %err, "discarding undecodable input");
                    self.presenter.read_failed()?;
                }
                Err(err) => {
                    failures += 1;
                    warn!(error = %err, failures, "failed to read input");
                    if failures >= self.max_read_failures {
                        return Err(VendoError::InputUnavailable { attempts: failures });
                    }
                    self.presenter.read_failed()?;
                }
            }
        }
    }

    fn finish(&mut self, transition: &Transition, summary: &mut SessionSummary) -> Result<()> {
        for event in &transition.events {
            self.presenter.outcome(event)?;
        }
        summary.record(transition);
        Ok(())
    }
}
