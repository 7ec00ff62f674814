use hashland::{
    error::{ ErrorCode, HashlandResult },
    interfaces::NftClient,
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ Address, Env, Vec };

use crate::{ events::PoolEvents, storage::{ get_config, get_depositor, save_depositor } };

pub fn increase_slot(env: &Env, sender: &Address, count: u32) -> HashlandResult {
    let config = get_config(env)?;
    validate!(env, count > 0, ErrorCode::InvalidSlotCount)?;

    let pool = env.current_contract_address();
    let slot_nft = NftClient::new(env, &config.slot_nft);

    validate!(
        env,
        slot_nft.balance(sender) >= count,
        ErrorCode::InsufficientBalance,
        "not enough slot tokens",
        count
    )?;
    validate!(
        env,
        slot_nft.is_approved_for_all(sender, &pool),
        ErrorCode::InsufficientApproval,
        "pool is not an approved operator of the slot owner"
    )?;

    // resolve ids before moving anything, transfers reorder the owner's enumeration
    let mut slot_ids = Vec::new(env);
    for index in 0..count {
        slot_ids.push_back(slot_nft.token_of_owner_by_index(sender, &index));
    }

    let mut depositor = get_depositor(env, sender);
    for slot_id in slot_ids.iter() {
        slot_nft.transfer_from(&pool, sender, &pool, &slot_id);
        depositor.slot_tokens.push_back(slot_id);
    }

    let capacity = depositor.capacity(env, &config)?;
    save_depositor(env, sender, &depositor);

    PoolEvents::increase_slot(env, sender.clone(), slot_ids, capacity);

    Ok(())
}

pub fn decrease_slot(env: &Env, sender: &Address, count: u32) -> HashlandResult {
    let config = get_config(env)?;
    let mut depositor = get_depositor(env, sender);

    validate!(
        env,
        count > 0 && count <= depositor.slot_tokens.len(),
        ErrorCode::InvalidSlotCount,
        "cannot return more slot tokens than staked",
        count
    )?;

    let remaining_slots = depositor.slot_tokens.len().safe_sub(count, env)?;
    let capacity = remaining_slots
        .safe_mul(config.capacity_per_slot, env)?
        .safe_add(config.base_capacity, env)?;
    validate!(
        env,
        depositor.staked_tokens.len() <= capacity,
        ErrorCode::SlotsInUse,
        "withdraw mining tokens before returning slots"
    )?;

    let pool = env.current_contract_address();
    let slot_nft = NftClient::new(env, &config.slot_nft);

    let mut slot_ids = Vec::new(env);
    for _ in 0..count {
        if let Some(slot_id) = depositor.slot_tokens.pop_back() {
            slot_nft.transfer_from(&pool, &pool, sender, &slot_id);
            slot_ids.push_back(slot_id);
        }
    }

    save_depositor(env, sender, &depositor);

    PoolEvents::decrease_slot(env, sender.clone(), slot_ids, capacity);

    Ok(())
}
