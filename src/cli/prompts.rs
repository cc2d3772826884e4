//! Centralized prompt and message text for the interactive session.

use crate::pass::CharClass;
use crate::settings::{DEFAULT_COUNT, MIN_LENGTH};

pub const WELCOME: &str = "Welcome to the Password Generator!";
pub const GENERATED: &str = "Generated passwords:";
pub const MORE: &str = "\nGenerate more passwords? (y/n): ";
pub const GOODBYE: &str = "Goodbye!";

pub fn length() -> String {
    format!("How long should the password be? (minimum {MIN_LENGTH}): ")
}

pub fn count() -> String {
    format!("How many passwords to generate? (press Enter for {DEFAULT_COUNT}): ")
}

pub fn include(class: CharClass) -> String {
    format!("Include {} (y/n): ", class.label())
}
