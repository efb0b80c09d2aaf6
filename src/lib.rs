//! Constrained random password generation and strength scoring
//!
//! Passwords are drawn uniformly from the alphabets of the selected
//! character classes, then repaired so each selected class is (usually)
//! represented. The evaluator scores any password from its actual content.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable generation over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `clipboard`: Enables copying passwords to the OS clipboard
//!
//! # Environment Variables
//!
//! - `PWD_GEN_DEFAULT_LENGTH`: Length used by `GenerationRequest::default()`
//!   (default: `12`)
//! - `PWD_GEN_DEBOUNCE_MS`: Delay before an async request runs (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_gen::{all_classes, evaluate, generate};
//! use secrecy::ExposeSecret;
//!
//! let password = generate("16", &all_classes()).expect("valid request");
//! assert_eq!(password.expose_secret().chars().count(), 16);
//!
//! let evaluation = evaluate(&password);
//! println!("Score: {}", evaluation.score.value());
//! println!("Strength: {}", evaluation.strength());
//! ```

// Internal modules
mod charset;
mod clipboard;
mod config;
mod error;
mod evaluator;
mod generator;
mod sections;

// Public API
pub use charset::{CharacterClass, all_classes, build_pool};
pub use clipboard::is_copyable;
pub use config::{default_length, debounce};
pub use error::{ERROR_SENTINELS, GenerationError, LengthIssue};
pub use evaluator::{Evaluation, StrengthLabel, StrengthScore, evaluate};
pub use generator::{
    GeneratedPassword, GenerationRequest, MAX_LENGTH, Password, generate, generate_with_rng,
    parse_length, replace_random_char,
};

#[cfg(feature = "clipboard")]
pub use clipboard::copy_to_clipboard;

#[cfg(feature = "async")]
pub use generator::generate_tx;
