//! Prompt/read loops over generic reader and writer handles.
//!
//! Generic so the whole console can be driven from in-memory buffers in
//! tests.

use std::io::{self, BufRead, Write};

use gausslab::prelude::Rational;

/// Console input/output with validating prompt loops.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one output line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Prompts until the user enters an integer within `min..=max`.
    pub fn read_choice(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.say(&format!("Value out of range ({min}..{max}). Try again."))?,
            }
        }
    }

    /// Prompts until the user enters a valid integer or fraction literal.
    pub fn read_rational(&mut self, prompt: &str) -> io::Result<Rational> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.parse::<Rational>() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(%err, input = %line, "rejected coefficient");
                    self.say("Invalid input. Use formats: 5 or -3/2")?;
                }
            }
        }
    }

    /// Prompts and discards the line; used for "press ENTER" pauses.
    pub fn wait_enter(&mut self, prompt: &str) -> io::Result<()> {
        self.prompt_line(prompt).map(|_| ())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console<'a>(script: &str, output: &'a mut Vec<u8>) -> ConsoleIo<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
        ConsoleIo::new(Cursor::new(script.as_bytes().to_vec()), output)
    }

    #[test]
    fn test_read_choice_retries_out_of_range() {
        let mut output = Vec::new();
        let mut io = console("9\nfoo\n2\n", &mut output);
        assert_eq!(io.read_choice("opt: ", 1, 3).unwrap(), 2);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Value out of range (1..3)").count(), 2);
    }

    #[test]
    fn test_read_rational_retries_invalid() {
        let mut output = Vec::new();
        let mut io = console("1.5\n1/0\n-3/2\n", &mut output);
        let value = io.read_rational("a11: ").unwrap();
        assert_eq!(value, Rational::from_i64(-3, 2).unwrap());
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut output = Vec::new();
        let mut io = console("", &mut output);
        assert!(io.read_choice("opt: ", 1, 3).is_err());
    }
}
