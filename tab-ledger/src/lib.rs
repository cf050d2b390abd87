//! TabTrack Ledger Core
//!
//! Pairwise obligation ledger with symmetric signed entries and derived
//! net balances.
//!
//! # Architecture
//!
//! - **Participant Directory**: owned registry of participant identifiers
//! - **Pairwise Ledger**: symmetric store of signed obligations per pair
//! - **Balance Calculator**: net positions derived from the ledger
//!
//! # Invariants
//!
//! - Symmetry: `debts_of(a)[b] == -debts_of(b)[a]` for every recorded pair
//! - Conservation: Σ(net balances) == 0 for all time
//! - Exact arithmetic: all amounts are `Decimal`, never floats

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod balance;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod types;

// Re-exports
pub use balance::{all_net_balances, net_balance, net_positions};
pub use directory::ParticipantDirectory;
pub use error::{Error, Result};
pub use ledger::PairwiseLedger;
pub use types::{NetPosition, ParticipantId, Posting};
