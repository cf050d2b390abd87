//! Demo binary: seed a tangled debt cycle and settle it up

use anyhow::Result;
use rust_decimal::Decimal;
use tab_settlement::{Config, SettlementEngine};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting TabTrack demo");

    let config = Config::from_env()?;
    let mut engine = SettlementEngine::new(config);

    let alice = engine.create_participant(Some("alice"))?;
    let bob = engine.create_participant(Some("bob"))?;
    let carol = engine.create_participant(Some("carol"))?;

    engine.record_debt(&alice, Decimal::from(10), &bob)?;
    engine.record_debt(&bob, Decimal::from(20), &carol)?;
    engine.record_debt(&carol, Decimal::from(30), &alice)?;

    println!("Net balances before settlement:");
    println!(
        "{}",
        serde_json::to_string_pretty(&engine.all_net_balances())?
    );

    let batch = engine.simplify()?;

    println!("Settlement batch:");
    println!("{}", serde_json::to_string_pretty(&batch)?);

    println!("Net balances after settlement:");
    println!(
        "{}",
        serde_json::to_string_pretty(&engine.all_net_balances())?
    );

    Ok(())
}
