// crates/console_input/src/lib.rs

use std::collections::VecDeque;
use std::io::{self, Write};

use colored::Colorize;

/// Source of interactive input lines.
///
/// Every prompt in the program goes through this trait so the same loops can
/// run against a real terminal or against a scripted sequence in tests.
pub trait LineReader {
    /// Prints `prompt` (without a trailing newline) and reads one line of
    /// input, returned without its line terminator. Returns an
    /// `UnexpectedEof` error when there is no more input to read.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive input from stdin, prompting on stdout.
pub struct Console;

impl LineReader for Console {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Pre-seeded input lines for tests; errors once the script runs out.
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineReader for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }
}

/// Asks a yes/no question, reprompting until the answer is recognizable.
/// Accepts `y`, `yes`, `n`, and `no` in any casing.
pub fn yes_or_no(input: &mut dyn LineReader, question: &str) -> io::Result<bool> {
    loop {
        let answer = input.read_line(&format!("{} [y/n] ", question))?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", "Please enter yes or no.".red().bold()),
        }
    }
}
