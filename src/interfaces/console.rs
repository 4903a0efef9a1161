use crate::domain::catalog::{Coin, MenuItem, REJECTED_COIN_LABEL};
use crate::domain::ports::Presenter;
use crate::domain::transaction::{OutcomeEvent, TransactionState};
use std::io::{self, Write};

const BOX_WIDTH: usize = 85;
const INDENT: &str = "          ";

/// Renders the classic console front panel of the machine.
pub struct ConsolePresenter<W: Write> {
    writer: W,
    /// The prompt line is still open and waits for the user's input.
    prompt_open: bool,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prompt_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn close_prompt(&mut self) -> io::Result<()> {
        if self.prompt_open {
            self.prompt_open = false;
            writeln!(self.writer)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn box_line(&mut self, content: &str) -> io::Result<()> {
        writeln!(self.writer, "  |{content:<BOX_WIDTH$}|")
    }

    fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{INDENT}{message}")
    }

    /// Hands a refused token back to the user, with the accepted coin list.
    fn hand_back(&mut self, token: &str) -> io::Result<()> {
        self.line(&format!("Unused coins returned. ({token})"))?;
        self.line(&valid_coins_message())
    }
}

fn valid_coins_message() -> String {
    let labels: Vec<&str> = Coin::ALL.iter().map(Coin::label).collect();
    match labels.split_last() {
        Some((last, rest)) => format!(
            "Please insert {} or {} coin only.",
            rest.join(", "),
            last
        ),
        None => String::new(),
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn heading(&mut self) -> io::Result<()> {
        self.close_prompt()?;
        let border = format!("  +{}+", "-".repeat(BOX_WIDTH));

        writeln!(self.writer)?;
        writeln!(self.writer, "{border}")?;
        writeln!(
            self.writer,
            "  |{:^BOX_WIDTH$}|",
            "The Vegan Chocolate Vending Machine"
        )?;
        writeln!(self.writer, "{border}")?;
        self.box_line("")?;
        self.box_line(
            "        Hey there! The following snacks are available for you to choose from:",
        )?;
        for item in MenuItem::ALL {
            self.box_line(&format!("            {} ({})", item.name(), item.price()))?;
        }
        self.box_line("")?;
        self.box_line(&format!("        {}", valid_coins_message()))?;
        self.box_line("")?;
        self.box_line(
            "        Type 'cancel' if you need to leave and I'll return your unused coins.",
        )?;
        self.box_line("")?;
        writeln!(self.writer, "{border}")?;
        self.writer.flush()
    }

    fn prompt(&mut self, state: &TransactionState, purchasable: &[MenuItem]) -> io::Result<()> {
        self.close_prompt()?;
        if !purchasable.is_empty() {
            self.line("The following snacks can now be purchased:")?;
            for item in purchasable {
                self.line(&format!(
                    "{} - {} ({})",
                    item.letter(),
                    item.name(),
                    item.price()
                ))?;
            }
            let mut choice = String::from("Please enter the letter of your choice.");
            if purchasable.len() < MenuItem::ALL.len() {
                choice.push_str(" You may also insert more coins.");
            }
            self.line(&choice)?;
        }
        writeln!(self.writer)?;
        write!(
            self.writer,
            "  >>>> [Your coins so far is {}] Enter input here:",
            state.balance
        )?;
        self.prompt_open = true;
        self.writer.flush()
    }

    fn outcome(&mut self, event: &OutcomeEvent) -> io::Result<()> {
        self.close_prompt()?;
        match event {
            // The running total is shown by the next prompt.
            OutcomeEvent::CoinAccepted { .. } => {}
            OutcomeEvent::CoinRejected { input } => {
                self.line(&format!(
                    "Sorry, I can't take this coin. ({REJECTED_COIN_LABEL})"
                ))?;
                self.hand_back(input)?;
            }
            OutcomeEvent::InvalidInput { input } => {
                self.line(
                    "Sorry, I don't know what to do with that. (Invalid selection or coin)",
                )?;
                self.hand_back(input)?;
            }
            OutcomeEvent::ItemDispensed { item } => {
                self.line(&format!("Here is your {}. Enjoy!", item.name()))?;
            }
            OutcomeEvent::NotEnoughCoins => {
                self.line("Snack not yet available. Please insert more coins.")?;
            }
            OutcomeEvent::ChangeReturned { amount } => {
                self.line(&format!("Unused coins returned. ({amount})"))?;
            }
            OutcomeEvent::Terminating => {
                self.line("Terminating VeganChocoVendo application...")?;
            }
            OutcomeEvent::TransactionEnded => {
                self.line("Bye. Until next time.")?;
            }
        }
        self.writer.flush()
    }

    fn read_failed(&mut self) -> io::Result<()> {
        self.close_prompt()?;
        self.line("Sorry, I couldn't read that. Please try again.")?;
        self.writer.flush()
    }
}
