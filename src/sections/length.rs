//! Length section - awards points for longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const LONG_LENGTH: usize = 12;
const MIN_LENGTH: usize = 8;

/// Awards 2 points at 12+ characters, 1 point at 8+, nothing below.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let points = if len >= LONG_LENGTH {
        2
    } else if len >= MIN_LENGTH {
        1
    } else {
        0
    };

    let reason = (len < LONG_LENGTH)
        .then(|| format!("Password shorter than {} characters", LONG_LENGTH));

    SectionResult { points, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"));
        assert_eq!(result.points, 0);
        assert_eq!(
            result.reason,
            Some("Password shorter than 12 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section(&secret("12345678"));
        assert_eq!(result.points, 1);
        assert!(result.reason.is_some());
    }

    #[test]
    fn test_length_section_long() {
        let result = length_section(&secret("LongEnough123!"));
        assert_eq!(result, SectionResult { points: 2, reason: None });
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        let result = length_section(&secret("éééé"));
        assert_eq!(result.points, 0);
    }
}
