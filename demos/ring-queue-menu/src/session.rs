//! The interactive loop: draw the menu, read a selection, drive the queue.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use ringq::{QueueError, RingQueue};
use tracing::{debug, info};

const CLEAR_SCREEN: &str = "\n\x1B[2J\x1B[H";

const MENU: &str = "Choose an option.\n\
                    1. Insert element.\n\
                    2. Delete the first element.\n\
                    3. Delete up to a position.\n\
                    4. Help.\n\
                    0. Exit.\n";

const INVALID_INPUT: &str = "Invalid input! Please try again.";
const INVALID_OPTION: &str = "Invalid option! Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Exit,
    Insert,
    DeleteFront,
    DeleteUpTo,
    Help,
    /// Hidden from the menu: shows the raw front and final indexes.
    Debug,
}

impl MenuOption {
    fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MenuOption::Exit),
            1 => Some(MenuOption::Insert),
            2 => Some(MenuOption::DeleteFront),
            3 => Some(MenuOption::DeleteUpTo),
            4 => Some(MenuOption::Help),
            -1 => Some(MenuOption::Debug),
            _ => None,
        }
    }
}

enum Input {
    Number(i16),
    Invalid,
    End,
}

fn help_text(capacity: usize) -> String {
    format!(
        "- Initialization: Starts with an empty queue of {capacity} slots, front at slot 0.\n\
         - Insertion: Writes the element after the last one, wrapping around to slot 0 if needed.\n\
         - Deletion: Moves the front forward by one, wrapping around if needed.\n\
         - Range deletion: Removes every element from the front up to the given 1-based position.\n\
         - Status: Shows the elements from front to back."
    )
}

fn error_note(option: MenuOption, err: QueueError) -> &'static str {
    match (option, err) {
        (_, QueueError::Full { .. }) => "Insertion error: The queue is full.",
        (MenuOption::Debug, QueueError::Empty) => "Debug error: The queue is empty.",
        (_, QueueError::Empty) => "Deletion error: The queue is empty.",
        (_, QueueError::InvalidPosition { .. }) => "Deletion error: Invalid position.",
    }
}

fn outcome_note(option: MenuOption, result: ringq::Result<()>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(err) => {
            debug!(?option, %err, "operation rejected");
            error_note(option, err).to_string()
        }
    }
}

/// One interactive run. Owns the queue and the note shown under its status.
pub struct Session<R, W> {
    input: R,
    output: W,
    queue: RingQueue,
    note: String,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Session {
            input,
            output,
            queue: RingQueue::new(),
            note: String::new(),
            clear_screen,
        }
    }

    /// Runs until the user picks exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(capacity = self.queue.capacity(), "session started");

        loop {
            self.render()?;

            let code = match self.read_number()? {
                Input::Number(code) => code,
                Input::Invalid => {
                    self.note = INVALID_INPUT.to_string();
                    continue;
                }
                Input::End => break,
            };

            let Some(option) = MenuOption::from_code(code) else {
                debug!(code, "unknown menu option");
                self.note = INVALID_OPTION.to_string();
                continue;
            };

            if self.select(option)?.is_break() {
                break;
            }
        }

        writeln!(self.output, "\nBye bye!")?;
        self.output.flush()?;
        info!(remaining = self.queue.len(), "session finished");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if self.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write!(
            self.output,
            "{MENU}{}\n> ",
            self.queue.status().with_note(&self.note)
        )?;
        self.output.flush().context("Failed to write menu")
    }

    fn select(&mut self, option: MenuOption) -> Result<ControlFlow<()>> {
        debug!(?option, "menu option selected");

        let note = match option {
            MenuOption::Exit => return Ok(ControlFlow::Break(())),
            MenuOption::Help => help_text(self.queue.capacity()),
            MenuOption::Insert | MenuOption::DeleteUpTo => {
                let prompt = if option == MenuOption::Insert {
                    "Enter the element to insert"
                } else {
                    "Enter the position to delete up to"
                };

                match self.read_operand(prompt)? {
                    Input::End => return Ok(ControlFlow::Break(())),
                    Input::Invalid => INVALID_INPUT.to_string(),
                    Input::Number(operand) => {
                        let result = if option == MenuOption::Insert {
                            self.queue.insert(operand)
                        } else {
                            self.queue.remove_range(operand).map(|_| ())
                        };
                        outcome_note(option, result)
                    }
                }
            }
            MenuOption::DeleteFront => {
                let result = self.queue.remove_front().map(|_| ());
                outcome_note(option, result)
            }
            MenuOption::Debug => match self.queue.debug_snapshot() {
                Ok(snapshot) => snapshot.to_string(),
                Err(err) => error_note(option, err).to_string(),
            },
        };

        self.note = note;
        Ok(ControlFlow::Continue(()))
    }

    fn read_operand(&mut self, prompt: &str) -> Result<Input> {
        write!(self.output, "\n{prompt}\n> ")?;
        self.output.flush()?;
        self.read_number()
    }

    /// Reads one line. Anything that is not an `i16` is discarded.
    fn read_number(&mut self) -> Result<Input> {
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(Input::End);
        }

        let line = String::from_utf8_lossy(&line);
        let trimmed = line.trim();
        Ok(match trimmed.parse::<i16>() {
            Ok(number) => Input::Number(number),
            Err(_) => {
                debug!(input = trimmed, "discarded invalid input");
                Input::Invalid
            }
        })
    }
}
