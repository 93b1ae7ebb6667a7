//! Line-oriented prompting
//!
//! Wraps an input and an output stream so the shell can be driven by the
//! terminal or by in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{TallyError, TallyResult};

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, text: &str) -> TallyResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write a pre-formatted block as-is
    pub fn print(&mut self, text: &str) -> TallyResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one line, without its line terminator
    ///
    /// Returns [`TallyError::InputClosed`] once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> TallyResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TallyError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt until `validator` accepts the answer
    ///
    /// Validation failures are printed and the prompt repeats; any other
    /// error is returned.
    pub fn safe_input<T, F>(&mut self, prompt: &str, validator: F) -> TallyResult<T>
    where
        F: Fn(&str) -> TallyResult<T>,
    {
        loop {
            let answer = self.read_line(prompt)?;
            match validator(&answer) {
                Ok(value) => return Ok(value),
                Err(TallyError::Validation(message)) => self.say(&format!("Error: {}", message))?,
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validate_amount;

    #[test]
    fn test_read_line_strips_terminator() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("  spaced out \r\nnext\n".as_bytes(), &mut out);

        assert_eq!(prompter.read_line("> ").unwrap(), "  spaced out ");
        assert_eq!(prompter.read_line("> ").unwrap(), "next");
        assert!(matches!(prompter.read_line("> "), Err(TallyError::InputClosed)));
        drop(prompter);

        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_safe_input_retries_until_valid() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("abc\n\n12.34.56\n-7.5\n".as_bytes(), &mut out);

        let amount = prompter.safe_input("Amount: ", validate_amount).unwrap();
        assert_eq!(amount.canonical(), "-7.5");
        drop(prompter);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Amount: ").count(), 4);
        assert_eq!(text.matches("Error: Invalid amount").count(), 3);
    }

    #[test]
    fn test_safe_input_stops_on_closed_input() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new("abc\n".as_bytes(), &mut out);

        let result = prompter.safe_input("Amount: ", validate_amount);
        assert!(matches!(result, Err(TallyError::InputClosed)));
    }
}
