extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address };

use super::setup::{ PoolTest, BASE_CAPACITY, CAPACITY_PER_SLOT };
use crate::ErrorCode;

#[test]
fn increase_slot_unlocks_blocked_deposit() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.mint_mining_tokens(&alice, &[1, 1, 1]);

    test.pool.deposit(&alice, &vec![&test.env, 1u64, 2u64]);
    assert_eq!(
        test.pool.try_deposit(&alice, &vec![&test.env, 3u64]),
        Err(Ok(ErrorCode::SlotCapacityExceeded))
    );

    test.mint_slot_tokens(&alice, 1);
    test.pool.increase_slot(&alice, &1);

    assert_eq!(test.slot_nft.owner_of(&1), test.pool.address);
    assert_eq!(test.pool.query_depositor(&alice).capacity, BASE_CAPACITY + 1);

    test.pool.deposit(&alice, &vec![&test.env, 3u64]);

    let depositor = test.pool.query_depositor(&alice);
    assert_eq!(depositor.power, 3);
    assert_eq!(depositor.staked_tokens.len(), 3);
    assert_eq!(depositor.slot_tokens, vec![&test.env, 1u64]);
}

#[test]
fn increase_slot_takes_several_tokens() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.mint_slot_tokens(&alice, 3);

    test.pool.increase_slot(&alice, &2);

    assert_eq!(test.pool.query_depositor(&alice).capacity, BASE_CAPACITY + 2);
    assert_eq!(test.slot_nft.balance(&alice), 1);
    assert_eq!(test.slot_nft.balance(&test.pool.address), 2);
}

#[test]
fn increase_slot_requires_slot_tokens() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.mint_slot_tokens(&alice, 1);

    assert_eq!(test.pool.try_increase_slot(&alice, &0), Err(Ok(ErrorCode::InvalidSlotCount)));
    assert_eq!(test.pool.try_increase_slot(&alice, &2), Err(Ok(ErrorCode::InsufficientBalance)));
    assert_eq!(test.pool.query_depositor(&alice).capacity, BASE_CAPACITY);
}

#[test]
fn increase_slot_requires_operator_approval() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.slot_nft.mint(&alice, &1);

    assert_eq!(test.pool.try_increase_slot(&alice, &1), Err(Ok(ErrorCode::InsufficientApproval)));
    assert_eq!(test.slot_nft.owner_of(&1), alice);
}

#[test]
fn decrease_slot_refused_while_slots_in_use() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.mint_mining_tokens(&alice, &[1, 1, 1]);
    test.mint_slot_tokens(&alice, 1);

    test.pool.increase_slot(&alice, &1);
    test.pool.deposit(&alice, &vec![&test.env, 1u64, 2u64, 3u64]);

    assert_eq!(test.pool.try_decrease_slot(&alice, &1), Err(Ok(ErrorCode::SlotsInUse)));
    assert_eq!(test.pool.try_decrease_slot(&alice, &2), Err(Ok(ErrorCode::InvalidSlotCount)));

    test.pool.withdraw(&alice, &vec![&test.env, 3u64]);
    test.pool.decrease_slot(&alice, &1);

    assert_eq!(test.slot_nft.owner_of(&1), alice);

    let depositor = test.pool.query_depositor(&alice);
    assert_eq!(depositor.capacity, BASE_CAPACITY);
    assert_eq!(depositor.slot_tokens.len(), 0);
}

#[test]
fn capacity_follows_config_updates() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    test.mint_slot_tokens(&alice, 1);
    test.pool.increase_slot(&alice, &1);

    test.pool.update_config(&test.admin, &None, &Some(4), &Some(2));

    assert_eq!(test.pool.query_depositor(&alice).capacity, 6);
}

#[test]
fn capacity_cannot_drop_below_staked_tokens() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    let ids = test.mint_mining_tokens(&alice, &[1, 1]);
    test.mint_slot_tokens(&alice, 1);
    test.pool.increase_slot(&alice, &1);
    test.pool.deposit(&alice, &ids);

    assert_eq!(
        test.pool.try_update_config(&test.admin, &None, &Some(0), &None),
        Err(Ok(ErrorCode::InvalidConfig))
    );
    assert_eq!(
        test.pool.try_update_config(&test.admin, &None, &None, &Some(CAPACITY_PER_SLOT + 1)),
        Ok(Ok(()))
    );
    assert_eq!(
        test.pool.try_update_config(&test.admin, &None, &None, &Some(CAPACITY_PER_SLOT)),
        Err(Ok(ErrorCode::InvalidConfig))
    );

    let depositor = test.pool.query_depositor(&alice);
    assert!(depositor.staked_tokens.len() <= depositor.capacity);

    // lowering is fine again once the pool is empty
    test.pool.withdraw(&alice, &ids);
    test.pool.update_config(&test.admin, &None, &Some(0), &Some(CAPACITY_PER_SLOT));
    assert_eq!(test.pool.query_depositor(&alice).capacity, CAPACITY_PER_SLOT);
}

#[test]
fn slots_do_not_change_rewards() {
    let test = PoolTest::setup();
    let alice = Address::generate(&test.env);
    let ids = test.mint_mining_tokens(&alice, &[1]);
    test.mint_slot_tokens(&alice, 1);

    test.pool.deposit(&alice, &ids);
    test.fund_rewards(100, 10);
    test.mine(3);
    test.pool.increase_slot(&alice, &1);
    test.mine(3);
    test.pool.decrease_slot(&alice, &1);

    assert_eq!(test.pool.query_depositor(&alice).power, 1);
    assert_eq!(test.pool.pending_reward(&test.reward_token.address, &alice), 60);
}
