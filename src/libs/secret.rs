//! Password handling: one-way hashing and hidden terminal input.
//!
//! Passwords are never stored or compared in the clear. The stored form is
//! the SHA-256 hex digest of the password, and credential checks compare
//! digests only.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use sha2::{Digest, Sha256};

pub struct Secret;

impl Secret {
    /// SHA-256 hex digest of a password, the form kept in `password_hash`.
    pub fn hash(password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Ask for a password without echoing it to the terminal.
    pub fn prompt(prompt: &str) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact()?;
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_hex_digest() {
        let digest = Secret::hash("hunter2");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, Secret::hash("hunter2"));
        assert_ne!(digest, Secret::hash("hunter3"));
    }
}
