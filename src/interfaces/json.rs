use crate::domain::catalog::MenuItem;
use crate::domain::ports::Presenter;
use crate::domain::transaction::{OutcomeEvent, TransactionState};
use serde::Serialize;
use std::io::{self, Write};

/// Writes one JSON object per line for every outcome event.
///
/// Headings and prompts are interactive chrome and are not written.
pub struct JsonPresenter<W: Write> {
    writer: W,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum HostEvent {
    ReadFailed,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write + Send> Presenter for JsonPresenter<W> {
    fn heading(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn prompt(&mut self, _state: &TransactionState, _purchasable: &[MenuItem]) -> io::Result<()> {
        Ok(())
    }

    fn outcome(&mut self, event: &OutcomeEvent) -> io::Result<()> {
        self.write_line(event)
    }

    fn read_failed(&mut self) -> io::Result<()> {
        self.write_line(&HostEvent::ReadFailed)
    }
}
