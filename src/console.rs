//! Console seam for all interactive I/O
//!
//! The game loop only ever talks to a [`Console`], so the whole turn flow can
//! be driven by a scripted implementation in tests without a real terminal.

use std::collections::VecDeque;
use std::io::{self, Write};

/// Blocking line-oriented console that all game prompts go through.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print a prompt (no trailing newline), then block until the user
    /// supplies a line. The returned answer is trimmed.
    fn prompt(&mut self, text: &str) -> io::Result<String>;
}

/// Console backed by the process stdin/stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{text}")?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for input",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Console fed from a fixed answer queue, capturing everything it prints.
///
/// Used by unit and integration tests to play whole games deterministically.
/// Running out of scripted answers is an error rather than a hang, so a test
/// with a missing answer fails instead of blocking forever.
#[derive(Debug, Default)]
pub struct Scripted {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed so far, prompts included, one entry per call.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any printed line contains the given fragment.
    pub fn printed(&self, fragment: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(fragment))
    }
}

impl Console for Scripted {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.transcript.push(text.to_string());
        let answer = self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted console ran out of answers",
            )
        })?;
        Ok(answer.trim().to_string())
    }
}
