//! The collect → generate → display loop.

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::info;

use crate::cli::{Prompter, Result, prompts};
use crate::pass;
use crate::settings::GenerationConfig;

/// An interactive session: a prompter for I/O and the random source passwords are drawn from.
pub struct Session<R, W, G> {
    prompter: Prompter<R, W>,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(prompter: Prompter<R, W>, rng: G) -> Self {
        Self { prompter, rng }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run rounds until the user declines to continue.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        writeln!(self.prompter.output_mut(), "{}", prompts::WELCOME)?;

        loop {
            let config = self.prompter.collect_config()?;
            self.generate_round(&config)?;

            if !self.prompter.ask_yes_no(prompts::MORE)? {
                let out = self.prompter.output_mut();
                writeln!(out, "{}", prompts::GOODBYE)?;
                out.flush()?;
                info!("session finished");
                return Ok(());
            }
            writeln!(self.prompter.output_mut())?;
        }
    }

    fn generate_round(&mut self, config: &GenerationConfig) -> Result<()> {
        let out = self.prompter.output_mut();
        writeln!(out)?;
        writeln!(out, "{}", prompts::GENERATED)?;

        for i in 1..=config.count() {
            let password = pass::generate(config, &mut self.rng);
            writeln!(out, "Password {i}: {}", password.as_str())?;
        }
        out.flush()?;

        info!(
            count = config.count(),
            length = config.length(),
            classes = config.selection().count(),
            "passwords generated"
        );
        Ok(())
    }
}
