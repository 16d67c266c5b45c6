//! Password generation and strength scoring.
//!
//! All randomness comes from the operating system CSPRNG ([`OsRng`]).
//! Every requested character class is guaranteed to appear at least once,
//! and the buffer is shuffled afterwards so the guaranteed characters do not
//! sit at predictable positions.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password the generator will produce.
pub const MAX_LENGTH: usize = 64;

/// Characters removed when ambiguous characters are excluded.
pub const AMBIGUOUS_CHARS: &str = "0O1lI";

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// A character class a generated password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    fn charset(self, exclude_ambiguous: bool) -> Vec<u8> {
        let base = match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        };
        base.bytes()
            .filter(|b| !(exclude_ambiguous && AMBIGUOUS_CHARS.as_bytes().contains(b)))
            .collect()
    }
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
        }
    }
}

impl PasswordOptions {
    /// Requested classes in a fixed order.
    pub fn classes(&self) -> Vec<CharClass> {
        [
            (self.uppercase, CharClass::Upper),
            (self.lowercase, CharClass::Lower),
            (self.digits, CharClass::Digit),
            (self.symbols, CharClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect()
    }
}

/// Generate a random password satisfying `options`.
///
/// # Errors
///
/// - [`ValidationError::PasswordLength`] if the length is outside `[8, 64]`
/// - [`ValidationError::NoCharacterClass`] if no class is selected
pub fn generate_password(options: &PasswordOptions) -> Result<String, ValidationError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(ValidationError::PasswordLength {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
            got: options.length,
        });
    }

    let classes = options.classes();
    if classes.is_empty() {
        return Err(ValidationError::NoCharacterClass);
    }

    let mut rng = OsRng;
    let mut charset = Vec::new();
    let mut password = Vec::with_capacity(options.length);

    for class in classes {
        let chars = class.charset(options.exclude_ambiguous);
        let guaranteed = chars
            .choose(&mut rng)
            .ok_or(ValidationError::NoCharacterClass)?;
        password.push(*guaranteed);
        charset.extend_from_slice(&chars);
    }

    while password.len() < options.length {
        let next = charset
            .choose(&mut rng)
            .ok_or(ValidationError::NoCharacterClass)?;
        password.push(*next);
    }

    password.shuffle(&mut rng);

    // Every charset is ASCII.
    Ok(password.into_iter().map(char::from).collect())
}

/// Password strength score with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: &'static str,
}

const STRENGTH_LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Good", "Strong"];

/// Score a password from 0 to 4.
///
/// One point each for length >= 8, length >= 12, a lowercase letter,
/// an uppercase letter, a digit and any non-alphanumeric character; capped at 4.
pub fn evaluate_strength(password: &str) -> Strength {
    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count().min(4) as u8;

    Strength {
        score,
        label: STRENGTH_LABELS[score as usize],
    }
}
