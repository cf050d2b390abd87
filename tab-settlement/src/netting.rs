//! Multilateral netting algorithm
//!
//! Replaces a web of bilateral obligations with the minimal equivalent
//! set of direct transfers.
//!
//! # Algorithm
//!
//! 1. Partition non-zero net positions into creditors and debtors
//! 2. Keep each group in a max-priority heap keyed by remaining magnitude
//! 3. Repeatedly match the largest creditor with the largest debtor,
//!    transferring the smaller of the two remainders
//! 4. Stop when both heaps drain; conservation guarantees they drain
//!    together
//!
//! Each match fully exhausts at least one participant, so the pass emits
//! at most k − 1 transfers for k non-zero positions.
//!
//! # Example
//!
//! ```text
//! Gross obligations:
//!   A owes B: 10
//!   B owes C: 20
//!   C owes A: 30
//!
//! Net positions:
//!   A: +20 (net creditor)
//!   B: -10 (net debtor)
//!   C: -10 (net debtor)
//!
//! Net transfers:
//!   B pays A: 10
//!   C pays A: 10
//!
//! Volume: 60 → 20
//! ```

use crate::{types::Settlement, Error, Result};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tab_ledger::{NetPosition, ParticipantId};

/// Remaining amount of one participant still to be matched
#[derive(Debug, Clone, PartialEq, Eq)]
struct PoolEntry {
    /// Unmatched magnitude (always positive)
    remaining: Decimal,

    /// Participant ID
    participant: ParticipantId,
}

impl Ord for PoolEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on remaining magnitude; ties resolve toward the
        // smaller identifier so emission order is reproducible.
        self.remaining
            .cmp(&other.remaining)
            .then_with(|| other.participant.cmp(&self.participant))
    }
}

impl PartialOrd for PoolEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Netting engine
#[derive(Debug, Clone, Copy, Default)]
pub struct NettingEngine;

impl NettingEngine {
    /// Create new netting engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the minimal transfer set for the given net positions
    ///
    /// Zero-balance participants are ignored. The input must conserve:
    /// positions that do not sum to zero are rejected, and a pool that
    /// drains before its counterpart surfaces the residual as an error.
    pub fn compute_transfers(&self, positions: &[NetPosition]) -> Result<Vec<Settlement>> {
        let total: Decimal = positions.iter().map(|p| p.net).sum();
        if total != Decimal::ZERO {
            return Err(Error::Netting(format!(
                "net positions sum to {}, not zero",
                total
            )));
        }

        let mut creditors = BinaryHeap::new();
        let mut debtors = BinaryHeap::new();

        for position in positions {
            let entry = PoolEntry {
                remaining: position.magnitude(),
                participant: position.participant.clone(),
            };
            if position.is_net_creditor() {
                creditors.push(entry);
            } else if position.is_net_debtor() {
                debtors.push(entry);
            }
        }

        let mut transfers = Vec::new();

        loop {
            match (creditors.pop(), debtors.pop()) {
                (Some(mut credit), Some(mut debit)) => {
                    let amount = credit.remaining.min(debit.remaining);

                    transfers.push(Settlement::new(
                        debit.participant.clone(),
                        credit.participant.clone(),
                        amount,
                    ));

                    credit.remaining -= amount;
                    debit.remaining -= amount;

                    if credit.remaining > Decimal::ZERO {
                        creditors.push(credit);
                    }
                    if debit.remaining > Decimal::ZERO {
                        debtors.push(debit);
                    }
                }
                (None, None) => break,
                (Some(credit), None) => {
                    return Err(Error::Netting(format!(
                        "residual credit of {} for {} after matching",
                        credit.remaining, credit.participant
                    )));
                }
                (None, Some(debit)) => {
                    return Err(Error::Netting(format!(
                        "residual debt of {} for {} after matching",
                        debit.remaining, debit.participant
                    )));
                }
            }
        }

        tracing::debug!("Netting produced {} transfers", transfers.len());
        Ok(transfers)
    }
}
