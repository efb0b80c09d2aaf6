//! Generation error taxonomy.

use thiserror::Error;

/// Why a length input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthIssue {
    /// The text is not an integer at all.
    NotANumber,
    /// The text is an integer, but zero or negative.
    NotPositive,
    /// The text is an integer above the supported maximum.
    TooLong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid length {input:?}: expected a positive integer")]
    InvalidLength { input: String, reason: LengthIssue },
    #[error("No character class selected")]
    NoClassSelected,
}

/// Text shown in place of a password when generation fails.
///
/// A UI that renders these into the password field must not forward them
/// to the clipboard; see [`crate::is_copyable`].
pub const ERROR_SENTINELS: [&str; 3] = [
    "Please enter a valid number",
    "Invalid length",
    "Please select at least one character type",
];

impl GenerationError {
    pub(crate) fn invalid_length(input: &str, reason: LengthIssue) -> Self {
        GenerationError::InvalidLength {
            input: input.to_string(),
            reason,
        }
    }

    /// Returns the user-facing message for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::InvalidLength {
                reason: LengthIssue::NotANumber,
                ..
            } => ERROR_SENTINELS[0],
            GenerationError::InvalidLength {
                reason: LengthIssue::NotPositive | LengthIssue::TooLong,
                ..
            } => ERROR_SENTINELS[1],
            GenerationError::NoClassSelected => ERROR_SENTINELS[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_not_a_number() {
        let err = GenerationError::invalid_length("abc", LengthIssue::NotANumber);
        assert_eq!(err.user_message(), "Please enter a valid number");
    }

    #[test]
    fn test_user_message_not_positive() {
        let err = GenerationError::invalid_length("0", LengthIssue::NotPositive);
        assert_eq!(err.user_message(), "Invalid length");
    }

    #[test]
    fn test_user_message_too_long() {
        let err = GenerationError::invalid_length("100000", LengthIssue::TooLong);
        assert_eq!(err.user_message(), "Invalid length");
    }

    #[test]
    fn test_user_message_no_class() {
        assert_eq!(
            GenerationError::NoClassSelected.user_message(),
            "Please select at least one character type"
        );
    }

    #[test]
    fn test_display_includes_input() {
        let err = GenerationError::invalid_length("twelve", LengthIssue::NotANumber);
        assert!(err.to_string().contains("\"twelve\""));
    }
}
