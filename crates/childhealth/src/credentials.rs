//! Credential storage.
//!
//! The shell only talks to the [`CredentialStore`] trait, so how passwords
//! are kept and compared can be swapped without touching the menus.

use std::collections::HashMap;

use tracing::debug;

/// Storage and verification of username/password pairs.
pub trait CredentialStore: std::fmt::Debug {
    /// Returns true iff `username` exists and its password matches exactly.
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// Adds a new account.
    ///
    /// Returns false, leaving the existing account untouched, if the
    /// username is already taken.
    fn register(&mut self, username: &str, password: &str) -> bool;

    /// Returns true if an account with this username exists.
    fn contains(&self, username: &str) -> bool;

    /// Number of registered accounts.
    fn len(&self) -> usize;

    /// Returns true if there are no accounts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory credential store that keeps passwords in plain text.
///
/// Comparison is exact and case-sensitive. Nothing is hashed; this type is
/// only suitable for a single-user local session.
#[derive(Debug, Default, Clone)]
pub struct PlainTextCredentials {
    users: HashMap<String, String>,
}

impl PlainTextCredentials {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for PlainTextCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = self
            .users
            .get(username)
            .is_some_and(|stored| stored == password);
        debug!(username, ok, "authenticate");
        ok
    }

    fn register(&mut self, username: &str, password: &str) -> bool {
        if self.users.contains_key(username) {
            debug!(username, "registration rejected, username taken");
            return false;
        }
        self.users.insert(username.to_string(), password.to_string());
        debug!(username, "registered");
        true
    }

    fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_authenticate() {
        let mut store = PlainTextCredentials::new();
        assert!(store.register("alice", "pw1"));
        assert!(store.authenticate("alice", "pw1"));
        assert!(store.contains("alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_register_keeps_first_password() {
        let mut store = PlainTextCredentials::new();
        assert!(store.register("alice", "original"));
        assert!(!store.register("alice", "second"));

        assert!(store.authenticate("alice", "original"));
        assert!(!store.authenticate("alice", "second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let store = PlainTextCredentials::new();
        assert!(!store.authenticate("nobody", ""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let mut store = PlainTextCredentials::new();
        store.register("bob", "secret");
        assert!(!store.authenticate("bob", "Secret"));
        assert!(!store.authenticate("bob", "secret "));
        assert!(!store.authenticate("Bob", "secret"));
    }

    #[test]
    fn test_empty_credentials_are_allowed() {
        let mut store = PlainTextCredentials::new();
        assert!(store.register("", ""));
        assert!(store.authenticate("", ""));
    }
}
