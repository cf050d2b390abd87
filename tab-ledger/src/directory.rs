//! Participant directory
//!
//! Owned registry of participant identifiers. The ledger validates every
//! posting against a directory passed in by the caller, so independent
//! ledgers can run against independent registries.

use crate::{
    types::ParticipantId,
    Error, Result,
};
use std::collections::BTreeSet;

/// Default prefix for generated participant names
pub const DEFAULT_NAME_PREFIX: &str = "User";

/// Participant registry
#[derive(Debug, Clone)]
pub struct ParticipantDirectory {
    /// Registered participants (sorted for deterministic enumeration)
    participants: BTreeSet<ParticipantId>,

    /// Prefix for generated names
    name_prefix: String,

    /// Next counter value for generated names
    next_auto: u64,
}

impl Default for ParticipantDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantDirectory {
    /// Create empty directory with the default name prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_NAME_PREFIX)
    }

    /// Create empty directory with a custom name prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            participants: BTreeSet::new(),
            name_prefix: prefix.into(),
            next_auto: 0,
        }
    }

    /// Register a participant under an explicit name
    ///
    /// Fails with [`Error::NameTaken`] if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>) -> Result<ParticipantId> {
        let id = ParticipantId::new(name);

        if self.participants.contains(&id) {
            return Err(Error::NameTaken(id.to_string()));
        }

        tracing::debug!("Registered participant {}", id);
        self.participants.insert(id.clone());
        Ok(id)
    }

    /// Register a participant under a generated name
    ///
    /// Names follow `{prefix}{counter}`. Counter values whose name was
    /// already taken explicitly are skipped.
    pub fn register_auto(&mut self) -> ParticipantId {
        loop {
            let candidate = ParticipantId::new(format!("{}{}", self.name_prefix, self.next_auto));
            self.next_auto += 1;

            if !self.participants.contains(&candidate) {
                tracing::debug!("Registered participant {}", candidate);
                self.participants.insert(candidate.clone());
                return candidate;
            }
        }
    }

    /// Check whether a participant is registered
    pub fn contains(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Enumerate all registered participants in identifier order
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter()
    }

    /// Number of registered participants
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Check whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Remove all participants and restart the name counter
    pub fn reset(&mut self) {
        self.participants.clear();
        self.next_auto = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_explicit_name() {
        let mut directory = ParticipantDirectory::new();
        let id = directory.register("alice").unwrap();

        assert_eq!(id.as_str(), "alice");
        assert!(directory.contains(&id));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut directory = ParticipantDirectory::new();
        directory.register("alice").unwrap();

        let result = directory.register("alice");
        assert!(matches!(result, Err(Error::NameTaken(_))));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_generated_names_are_sequential() {
        let mut directory = ParticipantDirectory::new();

        let first = directory.register_auto();
        let second = directory.register_auto();

        assert_eq!(first.as_str(), "User0");
        assert_eq!(second.as_str(), "User1");
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_generated_names_skip_taken() {
        let mut directory = ParticipantDirectory::new();
        directory.register("User0").unwrap();

        let generated = directory.register_auto();
        assert_eq!(generated.as_str(), "User1");
    }

    #[test]
    fn test_custom_prefix() {
        let mut directory = ParticipantDirectory::with_prefix("Member");
        let id = directory.register_auto();
        assert_eq!(id.as_str(), "Member0");
    }

    #[test]
    fn test_reset_restarts_numbering() {
        let mut directory = ParticipantDirectory::new();
        directory.register_auto();
        directory.register_auto();

        directory.reset();
        assert!(directory.is_empty());

        let id = directory.register_auto();
        assert_eq!(id.as_str(), "User0");
    }

    #[test]
    fn test_enumeration_is_sorted() {
        let mut directory = ParticipantDirectory::new();
        directory.register("carol").unwrap();
        directory.register("alice").unwrap();
        directory.register("bob").unwrap();

        let names: Vec<&str> = directory.participants().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }
}
