//! Shared engine handle
//!
//! The core itself is single-threaded and synchronous. When the engine
//! must be visible to concurrent callers, this handle puts one
//! mutual-exclusion boundary around each logical operation: a posting
//! and a full simplification pass are atomic with respect to one
//! another, since simplification reads and replaces the entire ledger
//! state.

use crate::{
    config::Config,
    engine::SettlementEngine,
    types::SettlementBatch,
    Result,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tab_ledger::ParticipantId;

/// Clone-able, thread-safe settlement engine handle
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<SettlementEngine>>,
}

impl SharedEngine {
    /// Create new shared engine
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SettlementEngine::new(config))),
        }
    }

    /// Register a participant
    pub fn create_participant(&self, name: Option<&str>) -> Result<ParticipantId> {
        self.inner.lock().create_participant(name)
    }

    /// All registered participants
    pub fn participants(&self) -> Vec<ParticipantId> {
        self.inner.lock().participants()
    }

    /// Record a debt posting
    pub fn record_debt(
        &self,
        debtor: &ParticipantId,
        amount: Decimal,
        creditor: &ParticipantId,
    ) -> Result<()> {
        self.inner.lock().record_debt(debtor, amount, creditor)
    }

    /// Owed-to map for one participant
    pub fn debts_of(&self, participant: &ParticipantId) -> Result<BTreeMap<ParticipantId, Decimal>> {
        self.inner.lock().debts_of(participant)
    }

    /// Net balance of one participant
    pub fn net_balance(&self, participant: &ParticipantId) -> Result<Decimal> {
        self.inner.lock().net_balance(participant)
    }

    /// Net balances of every registered participant
    pub fn all_net_balances(&self) -> BTreeMap<ParticipantId, Decimal> {
        self.inner.lock().all_net_balances()
    }

    /// Run a full simplification pass
    pub fn simplify(&self) -> Result<SettlementBatch> {
        self.inner.lock().simplify()
    }

    /// Clear all participants and obligations
    pub fn reset(&self) {
        self.inner.lock().reset()
    }
}
