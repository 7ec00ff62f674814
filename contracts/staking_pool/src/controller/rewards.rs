use core::cmp::min;

use hashland::{
    constants::{ MAX_REWARD_STREAMS, REWARD_PRECISION },
    error::{ ErrorCode, HashlandResult },
    math::{
        casting::Cast,
        rewards::{ blended_reward_rate, earned_since, emission_over, reward_growth },
        safe_math::SafeMath,
    },
    safe_increment,
    validate,
};
use soroban_sdk::{ log, token, Address, Env, Map, Vec };

use crate::{
    events::PoolEvents,
    storage::{
        get_config,
        get_depositor,
        get_pool_state,
        get_reward_tokens,
        get_stream,
        save_depositor,
        save_reward_tokens,
        save_stream,
        Depositor,
        RewardStream,
    },
};

/// Advances a stream to `now` without touching storage.
///
/// Emission is only counted up to `end_block`. Blocks with no power staked
/// emit into `unallocated` instead of the accumulator.
pub fn next_reward_stream(
    env: &Env,
    stream: &RewardStream,
    total_power: i128,
    now: u32
) -> HashlandResult<RewardStream> {
    let applicable_block = min(now, stream.end_block);
    if applicable_block <= stream.last_update_block {
        return Ok(stream.clone());
    }

    let elapsed = applicable_block.safe_sub(stream.last_update_block, env)?;
    let emitted = emission_over(env, elapsed, stream.reward_rate)?;
    let (growth, dust) = reward_growth(env, emitted, total_power)?;

    Ok(RewardStream {
        acc_reward_per_power: stream.acc_reward_per_power.safe_add(growth, env)?,
        unallocated: stream.unallocated.safe_add(dust, env)?,
        last_update_block: applicable_block,
        ..stream.clone()
    })
}

/// Brings every stream up to `now` and persists them.
pub fn accrue_streams(env: &Env, total_power: i128, now: u32) -> HashlandResult<Vec<RewardStream>> {
    let mut streams = Vec::new(env);
    for token in get_reward_tokens(env).iter() {
        if let Some(stream) = get_stream(env, &token) {
            let stream = next_reward_stream(env, &stream, total_power, now)?;
            save_stream(env, &stream);
            streams.push_back(stream);
        }
    }

    Ok(streams)
}

/// Moves everything `depositor` earned into `pending` and checkpoints it at the
/// current accumulators. Must run before any change to the depositor's power.
pub fn settle_depositor(
    env: &Env,
    depositor: &mut Depositor,
    streams: &Vec<RewardStream>
) -> HashlandResult {
    for stream in streams.iter() {
        let mut checkpoint = depositor.checkpoint(&stream.token);

        let earned = earned_since(
            env,
            depositor.power,
            stream.acc_reward_per_power,
            checkpoint.reward_debt
        )?;
        safe_increment!(env, checkpoint.pending, earned);
        checkpoint.reward_debt = stream.acc_reward_per_power;

        depositor.rewards.set(stream.token.clone(), checkpoint);
    }

    Ok(())
}

pub fn add_reward(
    env: &Env,
    sender: &Address,
    reward_token: &Address,
    amount: i128,
    duration: u32
) -> HashlandResult {
    let config = get_config(env)?;

    validate!(
        env,
        config.reward_operators.contains(sender),
        ErrorCode::NotAuthorized,
        "StakingPool: Add reward: You are not authorized!"
    )?;
    validate!(
        env,
        amount > 0 && duration > 0,
        ErrorCode::InvalidSchedule,
        "reward amount and duration must be positive"
    )?;

    let pool = env.current_contract_address();
    let token_client = token::Client::new(env, reward_token);

    validate!(
        env,
        token_client.balance(sender) >= amount,
        ErrorCode::InsufficientBalance,
        "funder balance below reward amount"
    )?;
    validate!(
        env,
        token_client.allowance(sender, &pool) >= amount,
        ErrorCode::InsufficientApproval,
        "funder allowance below reward amount"
    )?;

    let now = env.ledger().sequence();
    let total_power = get_pool_state(env).total_power;

    let mut reward_tokens = get_reward_tokens(env);
    let is_new_stream = !reward_tokens.contains(reward_token);

    let stream = match get_stream(env, reward_token) {
        Some(stream) => next_reward_stream(env, &stream, total_power, now)?,
        None => {
            validate!(
                env,
                reward_tokens.len() < MAX_REWARD_STREAMS,
                ErrorCode::TooManyRewardStreams
            )?;

            RewardStream::new(reward_token.clone(), now)
        }
    };

    let remaining = if stream.is_active(now) {
        emission_over(env, stream.end_block.safe_sub(now, env)?, stream.reward_rate)?
    } else {
        0
    };
    let carried_over = remaining.safe_add(stream.unallocated, env)?;

    let reward_rate = blended_reward_rate(env, amount, carried_over, duration)?;

    // whatever the new rate cannot emit exactly stays unallocated
    let scheduled = amount.safe_mul(REWARD_PRECISION, env)?.safe_add(carried_over, env)?;
    let emitted = reward_rate.safe_mul(duration.cast::<i128>(env)?, env)?;

    let stream = RewardStream {
        reward_rate,
        start_block: now,
        end_block: now.safe_add(duration, env)?,
        last_update_block: now,
        unallocated: scheduled.safe_sub(emitted, env)?,
        total_funded: stream.total_funded.safe_add(amount, env)?,
        ..stream
    };

    token_client.transfer_from(&pool, sender, &pool, &amount);
    save_stream(env, &stream);

    if is_new_stream {
        reward_tokens.push_back(reward_token.clone());
        save_reward_tokens(env, &reward_tokens);
    }

    log!(env, "StakingPool: reward stream funded until block", stream.end_block);

    PoolEvents::add_reward(
        env,
        sender.clone(),
        reward_token.clone(),
        amount,
        duration,
        reward_rate
    );

    Ok(())
}

pub fn harvest_all(
    env: &Env,
    sender: &Address,
    recipient: &Address
) -> HashlandResult<Map<Address, i128>> {
    get_config(env)?;

    let now = env.ledger().sequence();
    let streams = accrue_streams(env, get_pool_state(env).total_power, now)?;

    let mut depositor = get_depositor(env, sender);
    settle_depositor(env, &mut depositor, &streams)?;

    let pool = env.current_contract_address();
    let mut paid = Map::new(env);

    for mut stream in streams.iter() {
        let mut checkpoint = depositor.checkpoint(&stream.token);
        if checkpoint.pending == 0 {
            continue;
        }

        let amount = checkpoint.pending;
        token::Client::new(env, &stream.token).transfer(&pool, recipient, &amount);

        safe_increment!(env, stream.total_harvested, amount);
        save_stream(env, &stream);

        checkpoint.pending = 0;
        depositor.rewards.set(stream.token.clone(), checkpoint);
        paid.set(stream.token.clone(), amount);

        PoolEvents::harvest(env, sender.clone(), stream.token, recipient.clone(), amount);
    }

    if depositor.power > 0 || !paid.is_empty() {
        save_depositor(env, sender, &depositor);
    }

    Ok(paid)
}

/// Reward `depositor` could harvest from `reward_token` right now.
pub fn pending_reward(env: &Env, reward_token: &Address, depositor: &Address) -> HashlandResult<i128> {
    let Some(stream) = get_stream(env, reward_token) else {
        return Ok(0);
    };

    let now = env.ledger().sequence();
    let stream = next_reward_stream(env, &stream, get_pool_state(env).total_power, now)?;

    let depositor = get_depositor(env, depositor);
    let checkpoint = depositor.checkpoint(reward_token);

    checkpoint.pending.safe_add(
        earned_since(env, depositor.power, stream.acc_reward_per_power, checkpoint.reward_debt)?,
        env
    )
}

#[cfg(test)]
mod tests {
    use super::next_reward_stream;
    use crate::storage::RewardStream;
    use hashland::constants::REWARD_PRECISION;
    use soroban_sdk::{ testutils::Address as _, Address, Env };

    fn stream(env: &Env) -> RewardStream {
        RewardStream {
            reward_rate: 10 * REWARD_PRECISION,
            end_block: 10,
            ..RewardStream::new(Address::generate(env), 0)
        }
    }

    #[test]
    fn accrual_splits_emission_by_power() {
        let env = Env::default();
        let next = next_reward_stream(&env, &stream(&env), 4, 2).unwrap();

        assert_eq!(next.acc_reward_per_power, 5 * REWARD_PRECISION);
        assert_eq!(next.unallocated, 0);
        assert_eq!(next.last_update_block, 2);
    }

    #[test]
    fn accrual_without_power_is_unallocated() {
        let env = Env::default();
        let next = next_reward_stream(&env, &stream(&env), 0, 3).unwrap();

        assert_eq!(next.acc_reward_per_power, 0);
        assert_eq!(next.unallocated, 30 * REWARD_PRECISION);
    }

    #[test]
    fn accrual_stops_at_end_block() {
        let env = Env::default();
        let next = next_reward_stream(&env, &stream(&env), 1, 50).unwrap();

        assert_eq!(next.acc_reward_per_power, 100 * REWARD_PRECISION);
        assert_eq!(next.last_update_block, 10);

        let again = next_reward_stream(&env, &next, 1, 60).unwrap();
        assert_eq!(again, next);
    }
}
