use hashland::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, HashlandResult },
    math::safe_math::SafeMath,
};
use soroban_sdk::{ contracttype, log, Address, Env, Map, Vec };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    PoolState,
    RewardTokens,
    Stream(Address),
    Depositor(Address),
    StakedToken(u64),
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerConfig {
    /// Power of a level 1 mining token
    pub base_power: i128,
    /// Power factor applied for every level above 1
    pub level_multiplier: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub mining_nft: Address,
    pub slot_nft: Address,
    /// Slots every depositor has without staking slot tokens
    pub base_capacity: u32,
    /// Slots granted by each staked slot token
    pub capacity_per_slot: u32,
    pub power_config: PowerConfig,
    /// Accounts allowed to fund reward streams
    pub reward_operators: Vec<Address>,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> HashlandResult<Config> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "StakingPool: Config not set");
            ErrorCode::NotInitialized
        })?;
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    Ok(config)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolState {
    /// Sum of the power of every depositor
    pub total_power: i128,
    /// Number of mining tokens held in custody
    pub total_staked_tokens: u32,
}

pub fn get_pool_state(env: &Env) -> PoolState {
    env.storage().instance().get(&DataKey::PoolState).unwrap_or_default()
}

pub fn save_pool_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::PoolState, state);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardStream {
    pub token: Address,
    /// Tokens emitted per block, scaled by REWARD_PRECISION
    pub reward_rate: i128,
    pub start_block: u32,
    pub end_block: u32,
    pub last_update_block: u32,
    /// Accumulated reward per unit of power, scaled by REWARD_PRECISION
    pub acc_reward_per_power: i128,
    /// Scaled emission nobody earned (zero power blocks and rounding dust),
    /// rolled into the next funding of the stream
    pub unallocated: i128,
    pub total_funded: i128,
    pub total_harvested: i128,
}

impl RewardStream {
    pub fn new(token: Address, now: u32) -> Self {
        RewardStream {
            token,
            reward_rate: 0,
            start_block: now,
            end_block: now,
            last_update_block: now,
            acc_reward_per_power: 0,
            unallocated: 0,
            total_funded: 0,
            total_harvested: 0,
        }
    }

    pub fn is_active(&self, now: u32) -> bool {
        now < self.end_block
    }
}

pub fn get_reward_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::RewardTokens)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_reward_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage().instance().set(&DataKey::RewardTokens, tokens);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_stream(env: &Env, token: &Address) -> Option<RewardStream> {
    let key = DataKey::Stream(token.clone());
    let stream = env.storage().persistent().get::<_, RewardStream>(&key);
    if stream.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    stream
}

pub fn save_stream(env: &Env, stream: &RewardStream) {
    let key = DataKey::Stream(stream.token.clone());
    env.storage().persistent().set(&key, stream);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewardCheckpoint {
    /// Accumulated reward per power at the last settlement
    pub reward_debt: i128,
    /// Settled reward not yet harvested
    pub pending: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Depositor {
    pub power: i128,
    pub staked_tokens: Vec<u64>,
    pub slot_tokens: Vec<u64>,
    pub rewards: Map<Address, RewardCheckpoint>,
}

impl Depositor {
    pub fn new(env: &Env) -> Self {
        Depositor {
            power: 0,
            staked_tokens: Vec::new(env),
            slot_tokens: Vec::new(env),
            rewards: Map::new(env),
        }
    }

    pub fn capacity(&self, env: &Env, config: &Config) -> HashlandResult<u32> {
        self.slot_tokens
            .len()
            .safe_mul(config.capacity_per_slot, env)?
            .safe_add(config.base_capacity, env)
    }

    pub fn checkpoint(&self, token: &Address) -> RewardCheckpoint {
        self.rewards.get(token.clone()).unwrap_or_default()
    }
}

pub fn get_depositor(env: &Env, depositor: &Address) -> Depositor {
    let key = DataKey::Depositor(depositor.clone());
    match env.storage().persistent().get::<_, Depositor>(&key) {
        Some(info) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            info
        }
        None => Depositor::new(env),
    }
}

pub fn save_depositor(env: &Env, depositor: &Address, info: &Depositor) {
    let key = DataKey::Depositor(depositor.clone());
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakedToken {
    pub token_id: u64,
    pub owner: Address,
    /// Level read from the mining token contract at deposit time
    pub level: u32,
    /// Power credited at deposit and debited verbatim at withdrawal
    pub power: i128,
}

pub fn get_staked_token(env: &Env, token_id: u64) -> Option<StakedToken> {
    env.storage().persistent().get(&DataKey::StakedToken(token_id))
}

pub fn save_staked_token(env: &Env, staked: &StakedToken) {
    let key = DataKey::StakedToken(staked.token_id);
    env.storage().persistent().set(&key, staked);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_staked_token(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::StakedToken(token_id));
}
