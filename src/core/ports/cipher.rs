//! Symmetric encryption port for persisted session values

/// Encrypts values before they are persisted and decrypts them on read
pub trait Cipher: Send + Sync {
    /// Encrypt a plain value
    fn encrypt(&self, plain: &str) -> String;

    /// Decrypt a stored value; `None` when it cannot be decrypted
    fn decrypt(&self, cipher: &str) -> Option<String>;
}
