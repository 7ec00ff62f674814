use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ log, Env };

use crate::{
    constants::REWARD_PRECISION,
    error::{ ErrorCode, HashlandResult },
    math::{ casting::Cast, safe_math::SafeMath },
    validate,
};

/// Scaled emission of a stream over `elapsed_blocks`.
pub fn emission_over(env: &Env, elapsed_blocks: u32, reward_rate: i128) -> HashlandResult<i128> {
    elapsed_blocks.cast::<i128>(env)?.safe_mul(reward_rate, env)
}

/// Splits a scaled emission into growth of the accumulated reward per power and the
/// remainder that could not be attributed to anyone.
///
/// Returns `(growth_delta, unallocated_delta)`. With no power staked the whole
/// emission is unallocated.
pub fn reward_growth(env: &Env, emitted: i128, total_power: i128) -> HashlandResult<(i128, i128)> {
    if total_power == 0 {
        return Ok((0, emitted));
    }

    let growth = emitted.safe_div(total_power, env)?;
    let dust = emitted.safe_sub(growth.safe_mul(total_power, env)?, env)?;

    Ok((growth, dust))
}

/// Reward earned by `power` since the checkpoint `reward_debt`, in token units, rounded down.
pub fn earned_since(
    env: &Env,
    power: i128,
    acc_reward_per_power: i128,
    reward_debt: i128
) -> HashlandResult<i128> {
    let growth = acc_reward_per_power.safe_sub(reward_debt, env)?;

    validate!(env, growth >= 0, ErrorCode::MathError, "reward debt ahead of accumulator")?;

    power.fixed_mul_floor(growth, REWARD_PRECISION).ok_or_else(|| {
        log!(env, "Math error thrown at line {}", line!());
        ErrorCode::MathError
    })
}

/// Scaled per-block rate that emits `amount` plus any carried-over scaled reward
/// across `duration` blocks.
pub fn blended_reward_rate(
    env: &Env,
    amount: i128,
    carried_over: i128,
    duration: u32
) -> HashlandResult<i128> {
    validate!(env, duration > 0, ErrorCode::InvalidSchedule, "duration must be positive")?;

    amount
        .safe_mul(REWARD_PRECISION, env)?
        .safe_add(carried_over, env)?
        .safe_div(duration.cast::<i128>(env)?, env)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn emission_is_rate_times_blocks() {
        let env = Env::default();
        assert_eq!(emission_over(&env, 5, 10 * REWARD_PRECISION), Ok(50 * REWARD_PRECISION));
        assert_eq!(emission_over(&env, 0, 10 * REWARD_PRECISION), Ok(0));
    }

    #[test_case(100, 0, 0, 100 ; "no power leaves everything unallocated")]
    #[test_case(100, 4, 25, 0 ; "evenly divisible")]
    #[test_case(100, 3, 33, 1 ; "remainder is kept as dust")]
    fn growth_split(emitted: i128, total_power: i128, growth: i128, dust: i128) {
        let env = Env::default();
        assert_eq!(reward_growth(&env, emitted, total_power), Ok((growth, dust)));
    }

    #[test]
    fn earned_rounds_down() {
        let env = Env::default();
        // 2 power, growth of 1.5 units per power less a fraction
        let acc = (3 * REWARD_PRECISION) / 2 - 1;
        assert_eq!(earned_since(&env, 2, acc, 0), Ok(2));
        assert_eq!(earned_since(&env, 2, acc, acc), Ok(0));
    }

    #[test]
    fn earned_rejects_debt_above_accumulator() {
        let env = Env::default();
        assert_eq!(earned_since(&env, 1, 1, 2), Err(ErrorCode::MathError));
    }

    #[test]
    fn blended_rate_includes_carry() {
        let env = Env::default();
        assert_eq!(blended_reward_rate(&env, 100, 0, 10), Ok(10 * REWARD_PRECISION));
        assert_eq!(
            blended_reward_rate(&env, 10, 50 * REWARD_PRECISION, 10),
            Ok(6 * REWARD_PRECISION)
        );
        assert_eq!(blended_reward_rate(&env, 100, 0, 0), Err(ErrorCode::InvalidSchedule));
    }

    #[test]
    fn blended_rate_overflow_is_a_math_error() {
        let env = Env::default();
        let too_large = i128::MAX / REWARD_PRECISION + 1;
        assert_eq!(blended_reward_rate(&env, too_large, 0, 10), Err(ErrorCode::MathError));
    }

    #[test]
    fn heaviest_token_still_grows() {
        let env = Env::default();
        // one token unit per block shared by a million top-power tokens
        let total_power = crate::constants::MAX_TOKEN_POWER * 1_000_000;
        let (growth, _) = reward_growth(&env, REWARD_PRECISION, total_power).unwrap();
        assert!(growth > 0);
    }
}
