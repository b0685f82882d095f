//! Behavioral tests for the ERC-20 call surface.
//!
//! Each test drives a fresh engine through the public API only and checks
//! balances, allowances, supply and the emitted events.

use token_ledger::{Account, ErrorKind, Event, TokenEngine};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn alice() -> Account {
    Account::from_low_u64(0xA11CE)
}

fn bob() -> Account {
    Account::from_low_u64(0xB0B)
}

fn charles() -> Account {
    Account::from_low_u64(0xC4A5)
}

fn engine_with(holders: &[(Account, u128)]) -> TokenEngine {
    let mut engine = TokenEngine::default();
    for (holder, amount) in holders {
        engine.purchase(*holder, *amount).unwrap();
    }
    engine
}

fn assert_conserved(engine: &TokenEngine) {
    assert!(
        engine.state().is_conserved(),
        "sum of balances must equal total supply {}",
        engine.total_supply()
    );
}

// ============================================================================
// END-TO-END SCENARIO
// ============================================================================

#[test]
fn scenario_mint_approve_transfer() {
    let mut engine = TokenEngine::default();
    assert_eq!(engine.total_supply(), 0);

    engine.purchase(alice(), 1).unwrap();
    assert_eq!(engine.total_supply(), 1);
    assert_eq!(engine.balance_of(&alice()), 1);

    engine.purchase(alice(), 2).unwrap();
    assert_eq!(engine.total_supply(), 3);
    assert_eq!(engine.balance_of(&alice()), 3);

    engine.purchase(bob(), 3).unwrap();
    assert_eq!(engine.total_supply(), 6);
    assert_eq!(engine.balance_of(&bob()), 3);

    assert!(engine.approve(alice(), bob(), 1).unwrap());
    assert_eq!(engine.allowance(&alice(), &bob()), 1);

    assert!(engine.transfer(alice(), bob(), 1).unwrap());
    assert_eq!(engine.balance_of(&alice()), 2);
    assert_eq!(engine.balance_of(&bob()), 4);
    assert_eq!(engine.total_supply(), 6);

    let events_before = engine.events().len();
    let err = engine.transfer_from(bob(), alice(), charles(), 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientAllowance);
    assert_eq!(engine.events().len(), events_before);
    assert_eq!(engine.balance_of(&charles()), 0);
    assert_eq!(engine.allowance(&alice(), &bob()), 1);

    assert_conserved(&engine);
}

#[test]
fn scenario_event_sequence() {
    let mut engine = TokenEngine::default();
    engine.purchase(alice(), 3).unwrap();
    engine.approve(alice(), bob(), 1).unwrap();
    engine.transfer(alice(), bob(), 1).unwrap();
    engine.transfer_from(bob(), alice(), charles(), 1).unwrap();

    let events: Vec<Event> = engine.events().iter().cloned().collect();
    assert_eq!(
        events,
        vec![
            Event::transfer(Account::ZERO, alice(), 3),
            Event::approval(alice(), bob(), 1),
            Event::transfer(alice(), bob(), 1),
            Event::transfer(alice(), charles(), 1),
        ]
    );
}

// ============================================================================
// APPROVE
// ============================================================================

#[test]
fn approve_overwrites_and_always_emits() {
    let mut engine = TokenEngine::default();

    engine.approve(alice(), bob(), 5).unwrap();
    engine.approve(alice(), bob(), 2).unwrap();
    assert_eq!(engine.allowance(&alice(), &bob()), 2);

    // Same value again still notifies
    engine.approve(alice(), bob(), 2).unwrap();
    assert_eq!(engine.allowance(&alice(), &bob()), 2);

    let approvals: Vec<&Event> = engine.events().approvals().collect();
    assert_eq!(approvals.len(), 3);
    assert_eq!(approvals[0], &Event::approval(alice(), bob(), 5));
    assert_eq!(approvals[1], &Event::approval(alice(), bob(), 2));
    assert_eq!(approvals[2], &Event::approval(alice(), bob(), 2));
}

#[test]
fn approve_zero_and_self() {
    let mut engine = TokenEngine::default();

    assert!(engine.approve(alice(), bob(), 0).unwrap());
    assert!(engine.approve(alice(), alice(), 7).unwrap());

    assert_eq!(engine.allowance(&alice(), &bob()), 0);
    assert_eq!(engine.allowance(&alice(), &alice()), 7);
    assert_eq!(engine.events().len(), 2);
    assert_eq!(engine.events().get(0), Some(&Event::approval(alice(), bob(), 0)));
}

#[test]
fn approve_does_not_need_funds() {
    let mut engine = TokenEngine::default();
    engine.approve(alice(), bob(), u128::MAX).unwrap();
    assert_eq!(engine.allowance(&alice(), &bob()), u128::MAX);
    assert_eq!(engine.total_supply(), 0);
}

// ============================================================================
// ZERO-VALUE TRANSFERS
// ============================================================================

#[test]
fn zero_transfer_is_noop_with_event() {
    let mut engine = TokenEngine::default();
    let root = engine.state_root();

    assert!(engine.transfer(alice(), bob(), 0).unwrap());

    assert_eq!(engine.state_root(), root);
    assert_eq!(engine.events().last(), Some(&Event::transfer(alice(), bob(), 0)));
}

#[test]
fn zero_transfer_from_without_allowance_or_funds() {
    let mut engine = engine_with(&[(bob(), 5)]);
    let root = engine.state_root();

    // charles has no allowance from alice and alice has nothing
    assert!(engine.transfer_from(charles(), alice(), bob(), 0).unwrap());

    assert_eq!(engine.state_root(), root);
    assert_eq!(engine.events().last(), Some(&Event::transfer(alice(), bob(), 0)));
}

#[test]
fn zero_transfer_from_leaves_allowance() {
    let mut engine = engine_with(&[(alice(), 5)]);
    engine.approve(alice(), bob(), 3).unwrap();

    engine.transfer_from(bob(), alice(), charles(), 0).unwrap();

    assert_eq!(engine.allowance(&alice(), &bob()), 3);
    assert_eq!(engine.balance_of(&alice()), 5);
}

// ============================================================================
// SELF-TRANSFERS
// ============================================================================

#[test]
fn self_transfer_is_neutral() {
    let mut engine = engine_with(&[(alice(), 10)]);

    for n in [1, 5, 10] {
        assert!(engine.transfer(alice(), alice(), n).unwrap());
        assert_eq!(engine.balance_of(&alice()), 10);
        assert_eq!(engine.events().last(), Some(&Event::transfer(alice(), alice(), n)));
    }
    assert_conserved(&engine);
}

#[test]
fn self_transfer_above_balance_fails() {
    let mut engine = engine_with(&[(alice(), 10)]);
    let err = engine.transfer(alice(), alice(), 11).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
    assert_eq!(engine.balance_of(&alice()), 10);
}

#[test]
fn transfer_from_same_source_and_destination_consumes_allowance() {
    let mut engine = engine_with(&[(alice(), 10)]);
    engine.approve(alice(), bob(), 4).unwrap();

    engine.transfer_from(bob(), alice(), alice(), 3).unwrap();

    assert_eq!(engine.balance_of(&alice()), 10);
    assert_eq!(engine.allowance(&alice(), &bob()), 1);
}

#[test]
fn owner_spends_own_funds_without_allowance() {
    let mut engine = engine_with(&[(alice(), 10)]);

    engine.transfer_from(alice(), alice(), bob(), 6).unwrap();

    assert_eq!(engine.balance_of(&alice()), 4);
    assert_eq!(engine.balance_of(&bob()), 6);
    assert_eq!(engine.allowance(&alice(), &alice()), 0);
}

#[test]
fn owner_self_allowance_is_never_decremented() {
    let mut engine = engine_with(&[(alice(), 10)]);
    engine.approve(alice(), alice(), 2).unwrap();

    engine.transfer_from(alice(), alice(), bob(), 5).unwrap();

    assert_eq!(engine.allowance(&alice(), &alice()), 2);
    assert_eq!(engine.balance_of(&bob()), 5);
}

// ============================================================================
// ALLOWANCE CONSUMPTION
// ============================================================================

#[test]
fn allowance_consumed_exactly() {
    let mut engine = engine_with(&[(alice(), 10)]);
    engine.approve(alice(), bob(), 5).unwrap();

    assert!(engine.transfer_from(bob(), alice(), charles(), 3).unwrap());
    assert_eq!(engine.allowance(&alice(), &bob()), 2);
    assert_eq!(engine.balance_of(&alice()), 7);
    assert_eq!(engine.balance_of(&charles()), 3);

    let err = engine.transfer_from(bob(), alice(), charles(), 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientAllowance);
    assert_eq!(engine.allowance(&alice(), &bob()), 2);
    assert_eq!(engine.balance_of(&charles()), 3);
}

#[test]
fn allowance_can_be_spent_to_zero() {
    let mut engine = engine_with(&[(alice(), 10)]);
    engine.approve(alice(), bob(), 4).unwrap();

    engine.transfer_from(bob(), alice(), bob(), 4).unwrap();

    assert_eq!(engine.allowance(&alice(), &bob()), 0);
    assert_eq!(engine.balance_of(&bob()), 4);
}

#[test]
fn allowance_does_not_grant_missing_funds() {
    let mut engine = engine_with(&[(alice(), 2)]);
    engine.approve(alice(), bob(), 10).unwrap();
    let events_before = engine.events().len();

    let err = engine.transfer_from(bob(), alice(), charles(), 3).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
    assert_eq!(engine.allowance(&alice(), &bob()), 10);
    assert_eq!(engine.events().len(), events_before);
}

#[test]
fn max_allowance_still_decrements() {
    let mut engine = engine_with(&[(alice(), 10)]);
    engine.approve(alice(), bob(), u128::MAX).unwrap();

    engine.transfer_from(bob(), alice(), charles(), 10).unwrap();

    assert_eq!(engine.allowance(&alice(), &bob()), u128::MAX - 10);
}

// ============================================================================
// BALANCE BOUNDARIES
// ============================================================================

#[test]
fn transfer_exact_balance_succeeds() {
    let mut engine = engine_with(&[(alice(), 7)]);
    assert!(engine.transfer(alice(), bob(), 7).unwrap());
    assert_eq!(engine.balance_of(&alice()), 0);
    assert_eq!(engine.balance_of(&bob()), 7);
}

#[test]
fn transfer_one_over_balance_fails() {
    let mut engine = engine_with(&[(alice(), 7)]);
    let root = engine.state_root();

    let err = engine.transfer(alice(), bob(), 8).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
    assert_eq!(engine.state_root(), root);
}

#[test]
fn transfer_from_empty_account_fails() {
    let mut engine = TokenEngine::default();
    let err = engine.transfer(alice(), bob(), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientBalance);
    assert!(engine.events().is_empty());
}

#[test]
fn transfers_do_not_change_supply() {
    let mut engine = engine_with(&[(alice(), 50), (bob(), 50)]);
    engine.approve(alice(), charles(), 20).unwrap();

    engine.transfer(alice(), bob(), 10).unwrap();
    engine.transfer(bob(), charles(), 25).unwrap();
    engine.transfer_from(charles(), alice(), charles(), 20).unwrap();

    assert_eq!(engine.total_supply(), 100);
    assert_conserved(&engine);
}
