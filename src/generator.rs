//! Constrained password generation.

use std::collections::BTreeSet;

use rand::Rng;
use secrecy::SecretString;
use zeroize::Zeroize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{CharacterClass, all_classes, build_pool};
use crate::error::{GenerationError, LengthIssue};
use crate::evaluator::Evaluation;

#[cfg(feature = "async")]
use crate::evaluator::evaluate;

/// Longest password a single request may ask for.
pub const MAX_LENGTH: usize = 4096;

/// A generated password. Owned by the caller once returned.
pub type Password = SecretString;

/// Raw caller input for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Length as typed by the user, not yet validated.
    pub length_text: String,
    pub selected: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    pub fn new(length_text: impl Into<String>, selected: BTreeSet<CharacterClass>) -> Self {
        Self {
            length_text: length_text.into(),
            selected,
        }
    }
}

impl Default for GenerationRequest {
    /// Configured default length with every class selected.
    fn default() -> Self {
        Self::new(crate::config::default_length().to_string(), all_classes())
    }
}

/// A password together with its strength evaluation.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: Password,
    pub evaluation: Evaluation,
}

/// Parses a user-supplied length.
///
/// Surrounding whitespace, a leading sign and single `_` separators
/// between digits (`1_000`) are accepted.
///
/// # Errors
///
/// [`GenerationError::InvalidLength`] if the text is not an integer, is
/// not positive, or exceeds [`MAX_LENGTH`].
pub fn parse_length(length_text: &str) -> Result<usize, GenerationError> {
    let not_a_number = || GenerationError::invalid_length(length_text, LengthIssue::NotANumber);

    let value: i64 = strip_digit_separators(length_text.trim())
        .ok_or_else(not_a_number)?
        .parse()
        .map_err(|_| not_a_number())?;

    if value <= 0 {
        return Err(GenerationError::invalid_length(length_text, LengthIssue::NotPositive));
    }

    match usize::try_from(value) {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(GenerationError::invalid_length(length_text, LengthIssue::TooLong)),
    }
}

/// Removes `_` separators, rejecting leading, trailing or doubled ones.
fn strip_digit_separators(text: &str) -> Option<String> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    Some(text.replace('_', ""))
}

/// Generates a password using the thread-local RNG.
///
/// See [`generate_with_rng`].
pub fn generate(
    length_text: &str,
    selected: &BTreeSet<CharacterClass>,
) -> Result<Password, GenerationError> {
    generate_with_rng(&mut rand::thread_rng(), length_text, selected)
}

/// Draws `length` characters uniformly from the pool of `selected` classes,
/// then runs one repair step per selected class in the fixed class order.
///
/// A repair step overwrites a random position and may clobber the character
/// an earlier step placed, so a selected class can still be absent from the
/// result. With a single character and every class selected the symbol
/// always wins.
///
/// # Errors
///
/// - [`GenerationError::InvalidLength`] if `length_text` is not a positive integer
/// - [`GenerationError::NoClassSelected`] if `selected` is empty
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length_text: &str,
    selected: &BTreeSet<CharacterClass>,
) -> Result<Password, GenerationError> {
    let length = parse_length(length_text)?;
    let pool = build_pool(selected)?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating {} chars from {} classes", length, selected.len());

    let mut draft: Vec<char> = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    repair(rng, &mut draft, selected);

    let password: String = draft.iter().collect();
    draft.zeroize();

    Ok(SecretString::new(password.into()))
}

fn repair<R: Rng + ?Sized>(rng: &mut R, draft: &mut [char], selected: &BTreeSet<CharacterClass>) {
    for class in CharacterClass::ALL {
        if !selected.contains(&class) || draft.iter().any(|&c| class.contains(c)) {
            continue;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Repairing missing {}", class);

        replace_random_char(rng, draft, class.alphabet());
    }
}

/// Overwrites one uniformly chosen position with a uniformly chosen
/// character from `alphabet`.
///
/// Does nothing if `text` or `alphabet` is empty.
pub fn replace_random_char<R: Rng + ?Sized>(rng: &mut R, text: &mut [char], alphabet: &str) {
    let choices: Vec<char> = alphabet.chars().collect();
    if text.is_empty() || choices.is_empty() {
        return;
    }

    let index = rng.gen_range(0..text.len());
    text[index] = choices[rng.gen_range(0..choices.len())];
}

/// Generates and evaluates a request, sending the outcome through `tx`.
///
/// Waits for the configured debounce first; if `token` is cancelled by
/// then, nothing is generated or sent.
#[cfg(feature = "async")]
pub async fn generate_tx(
    request: GenerationRequest,
    token: CancellationToken,
    tx: mpsc::Sender<Result<GeneratedPassword, GenerationError>>,
) {
    tokio::time::sleep(crate::config::debounce()).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Generation request cancelled");
        return;
    }

    let outcome = generate(&request.length_text, &request.selected).map(|password| {
        let evaluation = evaluate(&password);
        GeneratedPassword {
            password,
            evaluation,
        }
    });

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}
