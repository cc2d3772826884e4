//! Character classes and the pools built from them.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// All classes, in the order they are offered to the user.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// The fixed alphabet for this class. Always ASCII.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    /// Human wording used in prompts ("Include {label} (y/n)").
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letters",
            CharClass::Uppercase => "uppercase letters",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which character classes are switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: [bool; 4],
}

impl Selection {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every class selected.
    pub fn all() -> Self {
        Self { chosen: [true; 4] }
    }

    pub fn with(mut self, class: CharClass, on: bool) -> Self {
        self.set(class, on);
        self
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        self.chosen[class.index()] = on;
    }

    pub fn is_selected(&self, class: CharClass) -> bool {
        self.chosen[class.index()]
    }

    /// The alphabet for `class`, or `None` when it is not selected.
    pub fn alphabet(&self, class: CharClass) -> Option<&'static str> {
        self.is_selected(class).then(|| class.alphabet())
    }

    /// Selected classes in prompt order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.is_selected(*class))
    }

    pub fn count(&self) -> usize {
        self.chosen.iter().filter(|on| **on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl FromIterator<CharClass> for Selection {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut selection = Selection::none();
        for class in iter {
            selection.set(class, true);
        }
        selection
    }
}

/// Build the combined pool of every selected alphabet, in class order.
pub fn build(selection: &Selection) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(selection));
    for class in selection.classes() {
        chars.extend_from_slice(class.alphabet().as_bytes());
    }
    chars
}

/// Size of the combined pool.
pub fn size(selection: &Selection) -> usize {
    selection.classes().map(|class| class.alphabet().len()).sum()
}
