//! Strength scoring sections
//!
//! Each section inspects one aspect of a password and awards points.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Outcome of a single scoring section.
/// - `points` - points awarded by the section
/// - `reason` - why the section fell short of its maximum, if it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub points: u8,
    pub reason: Option<String>,
}
