//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::CharacterClass;

/// Awards one point per character class present in the password.
///
/// Only the realized content matters: a class appearing by chance counts,
/// a class that was requested but is absent does not.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| CharacterClass::Symbol.contains(c));

    let found = [has_upper, has_lower, has_digit, has_special];
    let points = found.iter().filter(|&&b| b).count() as u8;

    let missing: Vec<_> = CharacterClass::ALL
        .iter()
        .zip(found)
        .filter(|(_, present)| !present)
        .map(|(class, _)| class.name())
        .collect();

    let reason = (!missing.is_empty()).then(|| format!("Missing: {}", missing.join(", ")));

    SectionResult { points, reason }
}
