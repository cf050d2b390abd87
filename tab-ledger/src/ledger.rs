//! Pairwise obligation ledger
//!
//! The authoritative store of signed obligations between every ordered
//! pair of participants. Entries are kept in the owed-to orientation: a
//! positive entry in `debts_of(a)[b]` means `b` owes `a` that amount on
//! net. Every write updates both sides of a pair, so the symmetry
//! invariant `debts_of(a)[b] == -debts_of(b)[a]` holds at all times.
//!
//! Entries that net to exactly zero are pruned, which keeps absence of an
//! entry interchangeable with an entry of zero.

use crate::{
    directory::ParticipantDirectory,
    types::{ParticipantId, Posting},
    Error, Result,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

type EntryMap = BTreeMap<ParticipantId, BTreeMap<ParticipantId, Decimal>>;

/// Symmetric store of pairwise obligations
#[derive(Debug, Clone, Default)]
pub struct PairwiseLedger {
    /// Owed-to entries per participant
    accounts: EntryMap,
}

impl PairwiseLedger {
    /// Create empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a debt posting from debtor to creditor
    ///
    /// A positive amount increases what the debtor owes the creditor; a
    /// negative amount reduces or reverses the obligation. Both sides of
    /// the pair are updated together, and validation happens before any
    /// mutation, so the ledger is never left half-written.
    pub fn record_debt(
        &mut self,
        directory: &ParticipantDirectory,
        debtor: &ParticipantId,
        amount: Decimal,
        creditor: &ParticipantId,
    ) -> Result<()> {
        if debtor == creditor {
            return Err(Error::SelfDebt(debtor.to_string()));
        }
        if !directory.contains(debtor) {
            return Err(Error::UnknownParticipant(debtor.to_string()));
        }
        if !directory.contains(creditor) {
            return Err(Error::UnknownParticipant(creditor.to_string()));
        }

        apply_posting(&mut self.accounts, debtor, creditor, amount);

        tracing::debug!("Recorded debt: {} owes {} -> {}", debtor, amount, creditor);
        Ok(())
    }

    /// Get the owed-to map for a participant
    ///
    /// A positive value means the counter-participant owes this
    /// participant. Zero entries are absent; a registered participant with
    /// no obligations gets an empty map.
    pub fn debts_of(
        &self,
        directory: &ParticipantDirectory,
        participant: &ParticipantId,
    ) -> Result<BTreeMap<ParticipantId, Decimal>> {
        if !directory.contains(participant) {
            return Err(Error::UnknownParticipant(participant.to_string()));
        }

        Ok(self
            .accounts
            .get(participant)
            .cloned()
            .unwrap_or_default())
    }

    /// Signed entry for one ordered pair (zero if absent)
    pub fn entry(&self, participant: &ParticipantId, counterparty: &ParticipantId) -> Decimal {
        self.accounts
            .get(participant)
            .and_then(|entries| entries.get(counterparty))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Atomically replace all postings
    ///
    /// Discards the current contents and installs the given postings as
    /// symmetric entries. The replacement is built aside and swapped in
    /// only when every posting is valid, so a failed call leaves the
    /// prior state untouched.
    pub fn replace_all(&mut self, postings: &[Posting]) -> Result<()> {
        let mut replacement = EntryMap::new();

        for posting in postings {
            if posting.debtor == posting.creditor {
                return Err(Error::SelfDebt(posting.debtor.to_string()));
            }
            apply_posting(
                &mut replacement,
                &posting.debtor,
                &posting.creditor,
                posting.amount,
            );
        }

        self.accounts = replacement;
        tracing::debug!("Replaced ledger contents with {} postings", postings.len());
        Ok(())
    }

    /// Total obligation volume across all pairs
    ///
    /// Sums the positive side of every recorded pair, i.e. the amount of
    /// money that would change hands if every bilateral position were
    /// paid out directly.
    pub fn gross_volume(&self) -> Decimal {
        self.accounts
            .values()
            .flat_map(|entries| entries.values())
            .copied()
            .filter(|amount| *amount > Decimal::ZERO)
            .sum()
    }

    /// Verify the symmetry invariant across the whole store
    ///
    /// Every write maintains symmetry, so this can only fail on a
    /// corrupted store. Exposed for verification in tests and audits.
    pub fn verify_symmetry(&self) -> Result<()> {
        for (owner, entries) in &self.accounts {
            for (counterparty, amount) in entries {
                let mirror = self.entry(counterparty, owner);
                if mirror != -*amount {
                    return Err(Error::InvariantViolation(format!(
                        "entry ({}, {}) is {} but mirror is {}",
                        owner, counterparty, amount, mirror
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check whether the ledger holds no entries
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.accounts.clear();
    }
}

/// Apply one symmetric posting to an entry map
///
/// The creditor's owed-to entry for the debtor grows by `amount`; the
/// debtor's mirror entry shrinks by the same amount.
fn apply_posting(
    accounts: &mut EntryMap,
    debtor: &ParticipantId,
    creditor: &ParticipantId,
    amount: Decimal,
) {
    update_entry(accounts, creditor, debtor, amount);
    update_entry(accounts, debtor, creditor, -amount);
}

fn update_entry(
    accounts: &mut EntryMap,
    owner: &ParticipantId,
    counterparty: &ParticipantId,
    delta: Decimal,
) {
    let entries = accounts.entry(owner.clone()).or_default();
    let value = entries.entry(counterparty.clone()).or_insert(Decimal::ZERO);
    *value += delta;

    if *value == Decimal::ZERO {
        entries.remove(counterparty);
    }
    if accounts
        .get(owner)
        .map(|entries| entries.is_empty())
        .unwrap_or(false)
    {
        accounts.remove(owner);
    }
}
