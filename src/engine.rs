//! Line-oriented driver: reads requests, dispatches them to the book, and
//! writes events and diagnostics to the given sinks.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{parse_line, OrderBook, Request};

/// Guards the process-wide one-shot startup contract: only the first
/// caller across every `Engine` in this process gets to drive a loop.
static STARTED: AtomicBool = AtomicBool::new(false);

/// Returned by [`Engine::start_blocking`] when some earlier caller already
/// won the race to start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("engine already started")]
pub struct AlreadyStarted;

/// Owns the order book and drives it from a line-oriented input source.
#[derive(Debug, Default)]
pub struct Engine {
    book: OrderBook,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
        }
    }

    /// The order book, for inspection.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Claim the process-wide one-shot start guarantee and run the loop.
    ///
    /// Returns `Err(AlreadyStarted)` without reading a single line if any
    /// earlier call — on this `Engine` or any other one in this process —
    /// already claimed the flag.
    pub fn start_blocking<R, W, Err>(
        &mut self,
        input: R,
        output: W,
        errors: Err,
    ) -> Result<io::Result<()>, AlreadyStarted>
    where
        R: BufRead,
        W: Write,
        Err: Write,
    {
        STARTED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| AlreadyStarted)?;
        Ok(self.run(input, output, errors))
    }

    /// Run the loop directly, bypassing the one-shot guard.
    ///
    /// Reads `input` line by line until end-of-stream. Each line is parsed
    /// and dispatched to the book; every event and diagnostic produced is
    /// written out before the next line is read, and both sinks are
    /// flushed after each line.
    pub fn run<R, W, Err>(&mut self, input: R, mut output: W, mut errors: Err) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        Err: Write,
    {
        for line in input.lines() {
            self.process_line(&line?, &mut output, &mut errors)?;
        }
        Ok(())
    }

    fn process_line<W, Err>(&mut self, line: &str, output: &mut W, errors: &mut Err) -> io::Result<()>
    where
        W: Write,
        Err: Write,
    {
        match parse_line(line) {
            Ok(Request::AddOrder {
                id,
                side,
                quantity,
                price,
            }) => {
                let mut events = Vec::new();
                match self.book.process_add(id, side, quantity, price, &mut events) {
                    Ok(()) => {
                        for event in &events {
                            writeln!(output, "{}", event)?;
                        }
                    }
                    Err(err) => writeln!(errors, "{}", err)?,
                }
            }
            Ok(Request::CancelOrder { id }) => {
                if let Err(err) = self.book.process_cancel(id) {
                    writeln!(errors, "{}", err)?;
                }
            }
            Err(err) => writeln!(errors, "{}", err)?,
        }

        output.flush()?;
        errors.flush()?;
        Ok(())
    }
}
