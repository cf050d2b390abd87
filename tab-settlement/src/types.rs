//! Core types for settlement

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tab_ledger::{ParticipantId, Posting};
use uuid::Uuid;

/// Single settle-up transfer after netting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Debtor (pays)
    pub debtor: ParticipantId,

    /// Creditor (receives)
    pub creditor: ParticipantId,

    /// Amount to transfer (always positive)
    pub amount: Decimal,
}

impl Settlement {
    /// Create new settlement transfer
    pub fn new(debtor: ParticipantId, creditor: ParticipantId, amount: Decimal) -> Self {
        Self {
            debtor,
            creditor,
            amount,
        }
    }

    /// View the transfer as a ledger posting
    pub fn as_posting(&self) -> Posting {
        Posting::new(self.debtor.clone(), self.amount, self.creditor.clone())
    }
}

/// Result of one simplification pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementBatch {
    /// Batch ID
    pub batch_id: Uuid,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Transfers to execute, in deterministic emission order
    pub transfers: Vec<Settlement>,

    /// Participants with a non-zero position going into the pass
    pub participant_count: usize,

    /// Number of transfers emitted
    pub transfer_count: usize,

    /// Total obligation volume before the pass
    pub total_gross_amount: Decimal,

    /// Total transfer volume after the pass
    pub total_net_amount: Decimal,

    /// Netting efficiency (0.0 - 1.0)
    /// Higher = more volume eliminated
    pub netting_efficiency: f64,
}

impl SettlementBatch {
    /// Calculate netting efficiency
    pub fn calculate_efficiency(&self) -> f64 {
        if self.total_gross_amount == Decimal::ZERO {
            return 0.0;
        }

        let netted = self.total_gross_amount - self.total_net_amount;
        let efficiency = netted / self.total_gross_amount;
        efficiency.to_f64().unwrap_or(0.0)
    }

    /// Calculate volume eliminated by netting
    pub fn calculate_savings(&self) -> Decimal {
        self.total_gross_amount - self.total_net_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settlement_as_posting() {
        let transfer = Settlement::new(
            ParticipantId::new("bob"),
            ParticipantId::new("alice"),
            Decimal::from(10),
        );

        let posting = transfer.as_posting();
        assert_eq!(posting.debtor.as_str(), "bob");
        assert_eq!(posting.creditor.as_str(), "alice");
        assert_eq!(posting.amount, Decimal::from(10));
    }

    #[test]
    fn test_batch_efficiency() {
        let batch = SettlementBatch {
            batch_id: Uuid::new_v4(),
            created_at: Utc::now(),
            transfers: vec![],
            participant_count: 3,
            transfer_count: 0,
            total_gross_amount: Decimal::new(100000, 2), // 1,000
            total_net_amount: Decimal::new(30000, 2),    // 300
            netting_efficiency: 0.0,
        };

        // Efficiency = (1000 - 300) / 1000 = 0.7 = 70%
        assert_eq!(batch.calculate_efficiency(), 0.7);

        // Savings = 700
        assert_eq!(batch.calculate_savings(), Decimal::new(70000, 2));
    }
}
