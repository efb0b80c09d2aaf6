//! Character classes and pool building.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::GenerationError;

// All alphabets are ASCII, so byte indexing and char indexing agree.
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four disjoint alphabets a password may draw from.
///
/// The derived ordering is the fixed class order used for pool building
/// and for the repair pass: Upper, Lower, Digit, Symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Returns `true` if `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "uppercase",
            CharacterClass::Lower => "lowercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "special characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every class, in the fixed order.
pub fn all_classes() -> BTreeSet<CharacterClass> {
    CharacterClass::ALL.into_iter().collect()
}

/// Concatenates the alphabets of the selected classes in the fixed order.
///
/// # Errors
///
/// Returns [`GenerationError::NoClassSelected`] if `selected` is empty.
pub fn build_pool(selected: &BTreeSet<CharacterClass>) -> Result<Vec<char>, GenerationError> {
    if selected.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let mut pool = Vec::new();
    for class in CharacterClass::ALL {
        if selected.contains(&class) {
            pool.extend(class.alphabet().chars());
        }
    }

    Ok(pool)
}
