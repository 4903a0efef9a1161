use super::catalog::MenuItem;
use super::transaction::{OutcomeEvent, TransactionState};
use async_trait::async_trait;
use std::io;

/// Where the machine's raw input lines come from.
#[async_trait]
pub trait InputSource: Send {
    /// Reads the next line without its terminator. `Ok(None)` means the
    /// source is exhausted.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Renders the machine's output for the user.
pub trait Presenter: Send {
    /// Called once at the start of every transaction.
    fn heading(&mut self) -> io::Result<()>;
    fn prompt(&mut self, state: &TransactionState, purchasable: &[MenuItem]) -> io::Result<()>;
    fn outcome(&mut self, event: &OutcomeEvent) -> io::Result<()>;
    /// Called after a failed read, before prompting again.
    fn read_failed(&mut self) -> io::Result<()>;
}

pub type InputSourceBox = Box<dyn InputSource>;
pub type PresenterBox = Box<dyn Presenter>;
