//! Password generation settings.

use crate::cli::InputError;
use crate::pass::Selection;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;

/// Number of passwords when the count prompt is left empty.
pub const DEFAULT_COUNT: usize = 1;

/// A validated request for `count` passwords of `length` characters.
///
/// Only obtainable through [`GenerationConfig::new`], so every instance satisfies:
/// at least one class selected, `length >= MIN_LENGTH`, `length` no smaller than the
/// number of selected classes, and `count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    count: usize,
    selection: Selection,
}

impl GenerationConfig {
    pub fn new(length: usize, count: usize, selection: Selection) -> Result<Self, InputError> {
        if selection.is_empty() {
            return Err(InputError::NoClassSelected);
        }
        if length < selection.count() {
            return Err(InputError::LengthBelowClasses {
                required: selection.count(),
            });
        }
        if length < MIN_LENGTH {
            return Err(InputError::LengthTooShort {
                minimum: MIN_LENGTH,
            });
        }
        if count < 1 {
            return Err(InputError::CountTooSmall);
        }

        Ok(Self {
            length,
            count,
            selection,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
