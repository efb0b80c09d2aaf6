//! Clipboard hand-off for generated passwords.

#[cfg(feature = "clipboard")]
use copypasta::{ClipboardContext, ClipboardProvider};
#[cfg(feature = "clipboard")]
use secrecy::{ExposeSecret, SecretString};

use crate::error::ERROR_SENTINELS;

/// Returns `true` if `text` is something worth copying: non-empty and not
/// one of the error messages a UI shows in place of a password.
pub fn is_copyable(text: &str) -> bool {
    !text.is_empty() && !ERROR_SENTINELS.contains(&text)
}

/// Copies a password to the OS clipboard.
///
/// Failures (no display server, clipboard unavailable) are swallowed.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(password: &SecretString) {
    if !is_copyable(password.expose_secret()) {
        return;
    }

    match ClipboardContext::new() {
        Ok(mut ctx) => {
            copy_with(&mut ctx, password);
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Clipboard unavailable: {}", _e);
        }
    }
}

#[cfg(feature = "clipboard")]
fn copy_with<P: ClipboardProvider>(provider: &mut P, password: &SecretString) -> bool {
    let text = password.expose_secret();
    if !is_copyable(text) {
        return false;
    }

    match provider.set_contents(text.to_string()) {
        Ok(()) => true,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Clipboard write failed: {}", _e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_copyable() {
        assert!(is_copyable("aB3$rT7!qW2@"));
        assert!(!is_copyable(""));
    }

    #[test]
    fn test_error_messages_not_copyable() {
        for sentinel in ERROR_SENTINELS {
            assert!(!is_copyable(sentinel));
        }
        assert!(!is_copyable(crate::GenerationError::NoClassSelected.user_message()));
    }

    #[cfg(feature = "clipboard")]
    mod provider {
        use super::super::*;
        use std::error::Error;

        #[derive(Default)]
        struct FakeClipboard {
            contents: Option<String>,
            fail: bool,
        }

        impl ClipboardProvider for FakeClipboard {
            fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
                self.contents.clone().ok_or_else(|| "empty".into())
            }

            fn set_contents(
                &mut self,
                contents: String,
            ) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
                if self.fail {
                    return Err("clipboard unavailable".into());
                }
                self.contents = Some(contents);
                Ok(())
            }
        }

        fn secret(s: &str) -> SecretString {
            SecretString::new(s.to_string().into())
        }

        #[test]
        fn test_copy_with_writes_password() {
            let mut clipboard = FakeClipboard::default();
            assert!(copy_with(&mut clipboard, &secret("x9!Kq")));
            assert_eq!(clipboard.contents.as_deref(), Some("x9!Kq"));
        }

        #[test]
        fn test_copy_with_skips_sentinel() {
            let mut clipboard = FakeClipboard::default();
            assert!(!copy_with(&mut clipboard, &secret("Invalid length")));
            assert!(clipboard.contents.is_none());
        }

        #[test]
        fn test_copy_with_swallows_failure() {
            let mut clipboard = FakeClipboard {
                fail: true,
                ..Default::default()
            };
            assert!(!copy_with(&mut clipboard, &secret("x9!Kq")));
        }
    }
}
