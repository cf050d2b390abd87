//! Main settlement engine
//!
//! Owns the participant directory, the pairwise ledger, and the netting
//! engine, and exposes the full obligation-tracking API behind one
//! facade.

use crate::{
    config::Config,
    netting::NettingEngine,
    types::{Settlement, SettlementBatch},
    Result,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tab_ledger::{
    all_net_balances, net_balance, net_positions, PairwiseLedger, ParticipantDirectory,
    ParticipantId, Posting,
};
use uuid::Uuid;

/// Settlement engine
#[derive(Debug)]
pub struct SettlementEngine {
    /// Participant directory
    directory: ParticipantDirectory,

    /// Pairwise ledger
    ledger: PairwiseLedger,

    /// Netting engine
    netting: NettingEngine,

    /// Configuration
    config: Config,
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Self {
        Self {
            directory: ParticipantDirectory::with_prefix(config.name_prefix.as_str()),
            ledger: PairwiseLedger::new(),
            netting: NettingEngine::new(),
            config,
        }
    }

    /// Register a participant
    ///
    /// With a name, registers it explicitly (duplicates rejected).
    /// Without one, a `{prefix}{counter}` name is generated.
    pub fn create_participant(&mut self, name: Option<&str>) -> Result<ParticipantId> {
        let id = match name {
            Some(name) => self.directory.register(name)?,
            None => self.directory.register_auto(),
        };
        Ok(id)
    }

    /// All registered participants in identifier order
    pub fn participants(&self) -> Vec<ParticipantId> {
        self.directory.participants().cloned().collect()
    }

    /// Record a debt posting from debtor to creditor
    pub fn record_debt(
        &mut self,
        debtor: &ParticipantId,
        amount: Decimal,
        creditor: &ParticipantId,
    ) -> Result<()> {
        self.ledger
            .record_debt(&self.directory, debtor, amount, creditor)?;
        Ok(())
    }

    /// Owed-to map for one participant
    pub fn debts_of(&self, participant: &ParticipantId) -> Result<BTreeMap<ParticipantId, Decimal>> {
        Ok(self.ledger.debts_of(&self.directory, participant)?)
    }

    /// Net balance of one participant
    pub fn net_balance(&self, participant: &ParticipantId) -> Result<Decimal> {
        Ok(net_balance(&self.ledger, &self.directory, participant)?)
    }

    /// Net balances of every registered participant
    pub fn all_net_balances(&self) -> BTreeMap<ParticipantId, Decimal> {
        all_net_balances(&self.ledger, &self.directory)
    }

    /// Simplify the ledger to its minimal settlement form
    ///
    /// Derives net positions, runs the netting pass, and atomically
    /// replaces the ledger contents with the resulting transfers. Every
    /// participant's net balance is preserved; on any error the prior
    /// ledger state is left untouched.
    pub fn simplify(&mut self) -> Result<SettlementBatch> {
        tracing::info!("Starting simplification pass");

        let total_gross = self.ledger.gross_volume();
        let positions = net_positions(&self.ledger, &self.directory);
        let participant_count = positions
            .iter()
            .filter(|p| p.net != Decimal::ZERO)
            .count();

        let transfers = self.netting.compute_transfers(&positions)?;

        let postings: Vec<Posting> = transfers.iter().map(Settlement::as_posting).collect();
        self.ledger.replace_all(&postings)?;

        let total_net: Decimal = transfers.iter().map(|t| t.amount).sum();
        let transfer_count = transfers.len();

        let mut batch = SettlementBatch {
            batch_id: Uuid::new_v4(),
            created_at: Utc::now(),
            transfers,
            participant_count,
            transfer_count,
            total_gross_amount: total_gross,
            total_net_amount: total_net,
            netting_efficiency: 0.0,
        };
        batch.netting_efficiency = batch.calculate_efficiency();

        tracing::info!(
            "Simplification complete: {} gross -> {} net across {} transfers ({:.1}% efficiency)",
            batch.total_gross_amount,
            batch.total_net_amount,
            batch.transfer_count,
            batch.netting_efficiency * 100.0
        );

        Ok(batch)
    }

    /// Clear all participants and obligations
    pub fn reset(&mut self) {
        self.directory.reset();
        self.ledger.clear();
        tracing::info!("Engine reset");
    }

    /// Engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_names_use_configured_prefix() {
        let config = Config {
            name_prefix: "Member".to_string(),
            ..Config::default()
        };
        let mut engine = SettlementEngine::new(config);

        let id = engine.create_participant(None).unwrap();
        assert_eq!(id.as_str(), "Member0");
    }

    #[test]
    fn test_simplify_on_empty_engine() {
        let mut engine = SettlementEngine::new(Config::default());

        let batch = engine.simplify().unwrap();
        assert!(batch.transfers.is_empty());
        assert_eq!(batch.participant_count, 0);
        assert_eq!(batch.total_gross_amount, Decimal::ZERO);
        assert_eq!(batch.netting_efficiency, 0.0);
    }

    #[test]
    fn test_simplify_preserves_net_balances() {
        let mut engine = SettlementEngine::new(Config::default());
        let a = engine.create_participant(Some("a")).unwrap();
        let b = engine.create_participant(Some("b")).unwrap();
        let c = engine.create_participant(Some("c")).unwrap();

        engine.record_debt(&a, Decimal::from(10), &b).unwrap();
        engine.record_debt(&b, Decimal::from(20), &c).unwrap();
        engine.record_debt(&c, Decimal::from(30), &a).unwrap();

        let before = engine.all_net_balances();
        let batch = engine.simplify().unwrap();
        let after = engine.all_net_balances();

        assert_eq!(before, after);
        assert_eq!(batch.transfer_count, 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = SettlementEngine::new(Config::default());
        let a = engine.create_participant(None).unwrap();
        let b = engine.create_participant(None).unwrap();
        engine.record_debt(&a, Decimal::from(5), &b).unwrap();

        engine.reset();

        assert!(engine.participants().is_empty());
        let id = engine.create_participant(None).unwrap();
        assert_eq!(id.as_str(), "User0");
    }
}
