//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use tracing::debug;

use super::{InputError, Result, SessionError, parse_count, parse_length, parse_yes_no, prompts};
use crate::pass::{CharClass, Selection};
use crate::settings::GenerationConfig;
use crate::terminal::{self, Style};

/// Asks questions on `output` and reads answers from `input` until they are valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until the answer is yes or no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.ask(prompt, parse_yes_no)
    }

    /// Ask for the password length until a number of at least the minimum is given.
    pub fn read_length(&mut self) -> Result<usize> {
        self.ask(&prompts::length(), parse_length)
    }

    /// Ask for the number of passwords. An empty answer means the default.
    pub fn read_count(&mut self) -> Result<usize> {
        self.ask(&prompts::count(), parse_count)
    }

    /// One yes/no question per class, in class order.
    pub fn read_selection(&mut self) -> Result<Selection> {
        let mut selection = Selection::none();
        for class in CharClass::ALL {
            let on = self.ask_yes_no(&prompts::include(class))?;
            selection.set(class, on);
        }
        Ok(selection)
    }

    /// Collect a full configuration. A bad length or count only repeats its own
    /// question; a bad class selection starts over from the length.
    pub fn collect_config(&mut self) -> Result<GenerationConfig> {
        loop {
            let length = self.read_length()?;
            let count = self.read_count()?;
            let selection = self.read_selection()?;

            match GenerationConfig::new(length, count, selection) {
                Ok(config) => return Ok(config),
                Err(err) => {
                    self.reject(&err)?;
                    debug!("restarting configuration");
                }
            }
        }
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(&err)?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        terminal::write_prompt(&mut self.output, prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    fn reject(&mut self, err: &InputError) -> Result<()> {
        debug!(error = ?err, "rejected input");
        terminal::write_error(&mut self.output, self.style, &err.to_string())?;
        Ok(())
    }
}
