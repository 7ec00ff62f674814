use hashland::{
    error::{ ErrorCode, HashlandResult },
    interfaces::{ MiningNftClient, NftClient },
    math::{ power::token_power, safe_math::SafeMath },
    safe_decrement,
    safe_increment,
    validate,
};
use soroban_sdk::{ log, Address, Env, Map, Vec };

use crate::{
    controller::rewards::{ accrue_streams, settle_depositor },
    events::PoolEvents,
    storage::{
        get_config,
        get_depositor,
        get_pool_state,
        get_staked_token,
        remove_staked_token,
        save_depositor,
        save_pool_state,
        save_staked_token,
        StakedToken,
    },
};

pub fn validate_token_ids(env: &Env, token_ids: &Vec<u64>) -> HashlandResult {
    validate!(env, !token_ids.is_empty(), ErrorCode::EmptyTokenList)?;

    let mut seen: Map<u64, ()> = Map::new(env);
    for token_id in token_ids.iter() {
        validate!(
            env,
            !seen.contains_key(token_id),
            ErrorCode::DuplicateTokenId,
            "token listed twice",
            token_id
        )?;
        seen.set(token_id, ());
    }

    Ok(())
}

pub fn deposit(env: &Env, sender: &Address, token_ids: Vec<u64>) -> HashlandResult {
    let config = get_config(env)?;
    validate_token_ids(env, &token_ids)?;

    let mut depositor = get_depositor(env, sender);

    let capacity = depositor.capacity(env, &config)?;
    let staked_after = depositor.staked_tokens.len().safe_add(token_ids.len(), env)?;
    validate!(
        env,
        staked_after <= capacity,
        ErrorCode::SlotCapacityExceeded,
        "ESLOT",
        staked_after,
        capacity
    )?;

    let pool = env.current_contract_address();
    let nft = NftClient::new(env, &config.mining_nft);
    let mining_nft = MiningNftClient::new(env, &config.mining_nft);

    validate!(
        env,
        nft.is_approved_for_all(sender, &pool),
        ErrorCode::InsufficientApproval,
        "pool is not an approved operator of the depositor"
    )?;

    let mut added_power = 0i128;
    let mut staked = Vec::new(env);
    for token_id in token_ids.iter() {
        validate!(
            env,
            nft.owner_of(&token_id) == *sender,
            ErrorCode::NotTokenOwner,
            "token not owned by depositor",
            token_id
        )?;

        let level = mining_nft.level(&token_id);
        let power = token_power(
            env,
            config.power_config.base_power,
            config.power_config.level_multiplier,
            level
        )?;
        safe_increment!(env, added_power, power);

        staked.push_back(StakedToken {
            token_id,
            owner: sender.clone(),
            level,
            power,
        });
    }

    let mut state = get_pool_state(env);
    let streams = accrue_streams(env, state.total_power, env.ledger().sequence())?;
    settle_depositor(env, &mut depositor, &streams)?;

    for staked_token in staked.iter() {
        nft.transfer_from(&pool, sender, &pool, &staked_token.token_id);
        depositor.staked_tokens.push_back(staked_token.token_id);
        save_staked_token(env, &staked_token);
    }

    safe_increment!(env, depositor.power, added_power);
    safe_increment!(env, state.total_power, added_power);
    safe_increment!(env, state.total_staked_tokens, token_ids.len());

    save_depositor(env, sender, &depositor);
    save_pool_state(env, &state);

    log!(env, "StakingPool: deposit: power", depositor.power);

    PoolEvents::deposit(env, sender.clone(), token_ids, added_power);

    Ok(())
}

pub fn withdraw(env: &Env, sender: &Address, token_ids: Vec<u64>) -> HashlandResult {
    let config = get_config(env)?;
    validate_token_ids(env, &token_ids)?;

    let mut depositor = get_depositor(env, sender);

    let mut removed_power = 0i128;
    for token_id in token_ids.iter() {
        let staked = get_staked_token(env, token_id);
        validate!(
            env,
            matches!(&staked, Some(staked) if staked.owner == *sender),
            ErrorCode::NotStakedByCaller,
            "token not staked by caller",
            token_id
        )?;
        if let Some(staked) = staked {
            safe_increment!(env, removed_power, staked.power);
        }
    }

    let mut state = get_pool_state(env);
    let streams = accrue_streams(env, state.total_power, env.ledger().sequence())?;
    settle_depositor(env, &mut depositor, &streams)?;

    let pool = env.current_contract_address();
    let nft = NftClient::new(env, &config.mining_nft);

    for token_id in token_ids.iter() {
        nft.transfer_from(&pool, &pool, sender, &token_id);

        if let Some(index) = depositor.staked_tokens.first_index_of(token_id) {
            depositor.staked_tokens.remove(index);
        }
        remove_staked_token(env, token_id);
    }

    safe_decrement!(env, depositor.power, removed_power);
    safe_decrement!(env, state.total_power, removed_power);
    safe_decrement!(env, state.total_staked_tokens, token_ids.len());

    save_depositor(env, sender, &depositor);
    save_pool_state(env, &state);

    PoolEvents::withdraw(env, sender.clone(), token_ids, removed_power);

    Ok(())
}
