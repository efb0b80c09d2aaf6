//! Password strength evaluator - main evaluation logic.

use std::fmt;

use secrecy::SecretString;

use crate::sections::{SectionResult, character_variety_section, length_section};

const STRONG_THRESHOLD: u8 = 5;
const MODERATE_THRESHOLD: u8 = 3;

/// Heuristic strength score in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 6;

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            s if s >= STRONG_THRESHOLD => StrengthLabel::Strong,
            s if s >= MODERATE_THRESHOLD => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: StrengthScore,
    pub label: StrengthLabel,
    /// One entry per section that fell short of its maximum.
    pub reasons: Vec<String>,
}

impl Evaluation {
    pub fn strength(&self) -> StrengthLabel {
        self.label
    }
}

/// Scores a password by its actual content.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `Evaluation` containing score, label and reasons.
pub fn evaluate(password: &SecretString) -> Evaluation {
    let mut reasons = Vec::new();
    let mut total = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    for (_section_name, section_fn) in sections {
        let SectionResult { points, reason } = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} awarded {} points", _section_name, points);

        total += points;
        reasons.extend(reason);
    }

    let score = StrengthScore(total.min(StrengthScore::MAX));

    Evaluation {
        score,
        label: StrengthLabel::from_score(score),
        reasons,
    }
}
