//! Balance calculator
//!
//! Derives net positions from the pairwise ledger. Because every posting
//! writes both sides of a pair, the derived balances always sum to zero:
//! money owed by someone is owed to someone else.

use crate::{
    directory::ParticipantDirectory,
    ledger::PairwiseLedger,
    types::{NetPosition, ParticipantId},
    Result,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Net balance of one participant
///
/// Positive means the participant is, on net, a creditor; negative means
/// net debtor.
pub fn net_balance(
    ledger: &PairwiseLedger,
    directory: &ParticipantDirectory,
    participant: &ParticipantId,
) -> Result<Decimal> {
    let debts = ledger.debts_of(directory, participant)?;
    Ok(debts.values().copied().sum())
}

/// Net balances of every registered participant
///
/// Participants with no obligations are included with a zero balance.
/// The returned values sum to exactly zero.
pub fn all_net_balances(
    ledger: &PairwiseLedger,
    directory: &ParticipantDirectory,
) -> BTreeMap<ParticipantId, Decimal> {
    directory
        .participants()
        .map(|participant| {
            let balance = ledger
                .debts_of(directory, participant)
                .map(|debts| debts.values().copied().sum())
                .unwrap_or(Decimal::ZERO);
            (participant.clone(), balance)
        })
        .collect()
}

/// Derived positions of every registered participant
pub fn net_positions(
    ledger: &PairwiseLedger,
    directory: &ParticipantDirectory,
) -> Vec<NetPosition> {
    directory
        .participants()
        .map(|participant| {
            let mut position = NetPosition::new(participant.clone());
            if let Ok(debts) = ledger.debts_of(directory, participant) {
                for amount in debts.values() {
                    position.add_entry(*amount);
                }
            }
            position
        })
        .collect()
}
