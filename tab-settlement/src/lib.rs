//! TabTrack Settlement
//!
//! Multilateral debt simplification over the pairwise ledger.
//!
//! # Architecture
//!
//! A simplification pass runs in three steps:
//!
//! 1. **Projection**: derive every participant's net position
//! 2. **Netting**: greedily match net creditors against net debtors,
//!    producing at most k − 1 transfers for k non-zero positions
//! 3. **Installation**: atomically replace the ledger contents with the
//!    transfer set, preserving every net balance
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use tab_settlement::{Config, SettlementEngine};
//!
//! fn main() -> tab_settlement::Result<()> {
//!     let mut engine = SettlementEngine::new(Config::default());
//!
//!     let a = engine.create_participant(Some("a"))?;
//!     let b = engine.create_participant(Some("b"))?;
//!     let c = engine.create_participant(Some("c"))?;
//!
//!     engine.record_debt(&a, Decimal::from(10), &b)?;
//!     engine.record_debt(&b, Decimal::from(20), &c)?;
//!     engine.record_debt(&c, Decimal::from(30), &a)?;
//!
//!     let batch = engine.simplify()?;
//!     assert_eq!(batch.transfers.len(), 2);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod netting;
pub mod shared;
pub mod types;

// Re-exports
pub use config::Config;
pub use engine::SettlementEngine;
pub use error::{Error, Result};
pub use netting::NettingEngine;
pub use shared::SharedEngine;
pub use types::{Settlement, SettlementBatch};
