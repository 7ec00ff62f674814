use soroban_sdk::Env;

use crate::{
    constants::{ MAX_TOKEN_LEVEL, MAX_TOKEN_POWER },
    error::{ ErrorCode, HashlandResult },
    math::{ casting::Cast, safe_math::SafeMath },
    validate,
};

/// Staking power of a mining token of the given level.
///
/// `power = base_power * level_multiplier ^ (level - 1)`
///
/// With a multiplier equal to the number of tokens burned by an upgrade, upgrading
/// leaves the total power of a holder unchanged.
pub fn token_power(
    env: &Env,
    base_power: i128,
    level_multiplier: u32,
    level: u32
) -> HashlandResult<i128> {
    validate!(
        env,
        level > 0 && level <= MAX_TOKEN_LEVEL,
        ErrorCode::InvalidTokenLevel,
        "token level out of range",
        level
    )?;

    let multiplier = level_multiplier.cast::<i128>(env)?.safe_pow(level - 1, env)?;

    base_power.safe_mul(multiplier, env)
}

/// Rejects configs whose top-level token would outweigh `MAX_TOKEN_POWER`.
pub fn validate_power_config(env: &Env, base_power: i128, level_multiplier: u32) -> HashlandResult {
    validate!(
        env,
        base_power > 0 && level_multiplier > 0,
        ErrorCode::InvalidConfig,
        "base power and level multiplier must be positive"
    )?;

    let max_power = token_power(env, base_power, level_multiplier, MAX_TOKEN_LEVEL).map_err(
        |_| ErrorCode::InvalidConfig
    )?;

    validate!(
        env,
        max_power <= MAX_TOKEN_POWER,
        ErrorCode::InvalidConfig,
        "top level token power {} too large",
        max_power
    )
}
