use crate::domain::catalog::MenuItem;
use crate::domain::money::Money;
use crate::domain::ports::{InputSource, Presenter};
use crate::domain::transaction::{OutcomeEvent, TransactionState};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// An input source that replays a fixed list of reads.
///
/// Each entry is either a line or the kind of I/O error the read should fail
/// with. Once the list is drained the source reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    reads: VecDeque<Result<String, io::ErrorKind>>,
}

impl ScriptedInput {
    pub fn new(reads: Vec<Result<String, io::ErrorKind>>) -> Self {
        Self {
            reads: reads.into(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reads: lines.into_iter().map(|line| Ok(line.into())).collect(),
        }
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.reads.pop_front() {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(kind)) => Err(io::Error::new(kind, "scripted read failure")),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Default)]
struct Recording {
    headings: usize,
    prompts: Vec<(Money, Vec<MenuItem>)>,
    events: Vec<OutcomeEvent>,
    read_failures: usize,
}

/// A presenter that records everything it is asked to show.
///
/// Clones share the same recording, so a handle kept by the caller can be
/// inspected after the machine that owns the other handle has finished.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    recording: Arc<Mutex<Recording>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.recording
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn headings(&self) -> usize {
        self.lock().headings
    }

    pub fn prompts(&self) -> Vec<(Money, Vec<MenuItem>)> {
        self.lock().prompts.clone()
    }

    pub fn events(&self) -> Vec<OutcomeEvent> {
        self.lock().events.clone()
    }

    pub fn read_failures(&self) -> usize {
        self.lock().read_failures
    }
}

impl Presenter for RecordingPresenter {
    fn heading(&mut self) -> io::Result<()> {
        self.lock().headings += 1;
        Ok(())
    }

    fn prompt(&mut self, state: &TransactionState, purchasable: &[MenuItem]) -> io::Result<()> {
        self.lock()
            .prompts
            .push((state.balance, purchasable.to_vec()));
        Ok(())
    }

    fn outcome(&mut self, event: &OutcomeEvent) -> io::Result<()> {
        self.lock().events.push(event.clone());
        Ok(())
    }

    fn read_failed(&mut self) -> io::Result<()> {
        self.lock().read_failures += 1;
        Ok(())
    }
}
