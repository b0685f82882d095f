//! Token Ledger - Binary Entry Point
//!
//! Runs a short purchase / approve / transfer session against a fresh
//! engine and prints the resulting balances, events and receipt.
//!
//! Configuration comes from the TOML file named by `TOKEN_LEDGER_CONFIG`,
//! or from `TOKEN_*` environment variables when that is unset.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use token_ledger::{Account, LedgerConfig, TokenEngine};

fn load_config() -> anyhow::Result<LedgerConfig> {
    match std::env::var("TOKEN_LEDGER_CONFIG") {
        Ok(path) => LedgerConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path)),
        Err(_) => LedgerConfig::from_env().context("loading config from environment"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let mut engine = TokenEngine::from_config(&config);
    let metadata = engine.metadata().clone();

    let alice = Account::from_low_u64(1);
    let bob = Account::from_low_u64(2);
    let charles = Account::from_low_u64(3);

    println!("===========================================");
    println!("  Token Ledger - {} ({})", metadata.name, metadata.symbol);
    println!("===========================================");
    println!();

    engine.purchase(alice, 1)?;
    engine.purchase(alice, 2)?;
    engine.purchase(bob, 3)?;
    engine.approve(alice, bob, 1)?;
    engine.transfer(alice, bob, 1)?;

    // Only 1 was approved, so this is rejected and leaves no trace
    if let Err(err) = engine.transfer_from(bob, alice, charles, 2) {
        println!("transferFrom rejected: {}", err);
        println!();
    }

    println!("Balances:");
    for (name, account) in [("alice", alice), ("bob", bob), ("charles", charles)] {
        let balance = engine.balance_of(&account);
        println!("  {:<8} {} ({})", name, balance, metadata.format_amount(balance));
    }
    println!("  supply   {}", engine.total_supply());
    println!();

    println!("Events:");
    for (i, event) in engine.events().iter().enumerate() {
        println!(
            "  #{} {:?} {} -> {} value={}",
            i,
            event.kind(),
            event.from(),
            event.to(),
            event.value
        );
    }
    println!();

    let receipt = engine.receipt();
    println!("Receipt:");
    println!("  applied:    {}", receipt.operations_applied);
    println!("  rejected:   {}", receipt.operations_rejected);
    println!("  state root: {}", receipt.state_root_hex());

    Ok(())
}
