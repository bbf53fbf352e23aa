//! Pass-through cipher

use crate::core::ports::Cipher;

/// Stores values as-is
///
/// Used when the session file is protected by file permissions alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl Cipher for Plaintext {
    fn encrypt(&self, plain: &str) -> String {
        plain.to_string()
    }

    fn decrypt(&self, cipher: &str) -> Option<String> {
        Some(cipher.to_string())
    }
}
