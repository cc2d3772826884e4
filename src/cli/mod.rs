//! Interactive input: prompting, parsing and input errors.

mod error;
mod input;
mod parse;
pub mod prompts;

pub use error::{InputError, Result, SessionError};
pub use input::Prompter;
pub use parse::{parse_count, parse_length, parse_yes_no};
