//! Core types for the ledger
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money)
//! - Deterministic ordering (identifiers are totally ordered)
//! - Memory safety (no unsafe code)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier (name or handle)
///
/// Identifiers are opaque to the ledger: equality and ordering are by the
/// underlying string. Only the directory creates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create new participant ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed obligation posting between two participants
///
/// A positive amount means the debtor owes the creditor that much more.
/// Negative amounts reduce or reverse the obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Debtor (owes)
    pub debtor: ParticipantId,

    /// Creditor (is owed)
    pub creditor: ParticipantId,

    /// Signed amount
    pub amount: Decimal,
}

impl Posting {
    /// Create new posting
    pub fn new(debtor: ParticipantId, amount: Decimal, creditor: ParticipantId) -> Self {
        Self {
            debtor,
            creditor,
            amount,
        }
    }
}

/// Derived net position of one participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetPosition {
    /// Participant ID
    pub participant: ParticipantId,

    /// Total owed to this participant by others
    pub total_receivable: Decimal,

    /// Total this participant owes to others
    pub total_owed: Decimal,

    /// Net position (positive = net creditor, negative = net debtor)
    pub net: Decimal,
}

impl NetPosition {
    /// Create new empty position
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            total_receivable: Decimal::ZERO,
            total_owed: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Fold one signed ledger entry into the position
    pub fn add_entry(&mut self, amount: Decimal) {
        if amount > Decimal::ZERO {
            self.total_receivable += amount;
        } else {
            self.total_owed += -amount;
        }
        self.net = self.total_receivable - self.total_owed;
    }

    /// Check if net creditor (owed money)
    pub fn is_net_creditor(&self) -> bool {
        self.net > Decimal::ZERO
    }

    /// Check if net debtor (owes money)
    pub fn is_net_debtor(&self) -> bool {
        self.net < Decimal::ZERO
    }

    /// Get absolute net position
    pub fn magnitude(&self) -> Decimal {
        self.net.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_id_ordering() {
        let a = ParticipantId::new("alice");
        let b = ParticipantId::new("bob");
        assert!(a < b);
        assert_eq!(a.as_str(), "alice");
    }

    #[test]
    fn test_net_position_folding() {
        let mut position = NetPosition::new(ParticipantId::new("alice"));

        // Owed 150 by others
        position.add_entry(Decimal::new(15000, 2));
        assert_eq!(position.total_receivable, Decimal::new(15000, 2));
        assert!(position.is_net_creditor());

        // Owes 100 to others
        position.add_entry(Decimal::new(-10000, 2));
        assert_eq!(position.total_owed, Decimal::new(10000, 2));

        // Net position: +50
        assert_eq!(position.net, Decimal::new(5000, 2));
        assert!(position.is_net_creditor());
        assert!(!position.is_net_debtor());
        assert_eq!(position.magnitude(), Decimal::new(5000, 2));
    }
}
