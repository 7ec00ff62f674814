use hashland::error::ErrorCode;
use soroban_sdk::{ Address, BytesN, Env, Map, Vec };

use crate::{
    msg::{ ConfigResponse, DepositorResponse },
    storage::{ PoolState, PowerConfig, RewardStream, StakedToken },
};

pub trait StakingPoolTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        mining_nft: Address,
        slot_nft: Address,
        base_capacity: u32,
        capacity_per_slot: u32,
        power_config: PowerConfig
    );

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn update_config(
        env: Env,
        sender: Address,
        new_admin: Option<Address>,
        base_capacity: Option<u32>,
        capacity_per_slot: Option<u32>
    ) -> Result<(), ErrorCode>;

    fn update_reward_operators(
        env: Env,
        sender: Address,
        to_add: Vec<Address>,
        to_remove: Vec<Address>
    ) -> Result<(), ErrorCode>;

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    // ################################################################
    //                             REWARDS
    // ################################################################

    /// Funds the stream of `reward_token` with `amount` emitted over the next `duration` blocks.
    ///
    /// Whatever the stream had not emitted yet, and any reward nobody earned, is blended
    /// into the new rate.
    fn add_reward(
        env: Env,
        sender: Address,
        reward_token: Address,
        amount: i128,
        duration: u32
    ) -> Result<(), ErrorCode>;

    /// Pays every pending reward of `sender` to `recipient`, returning the amount paid per token.
    fn harvest_all(
        env: Env,
        sender: Address,
        recipient: Address
    ) -> Result<Map<Address, i128>, ErrorCode>;

    // ################################################################
    //                             DEPOSITOR
    // ################################################################

    fn deposit(env: Env, sender: Address, token_ids: Vec<u64>) -> Result<(), ErrorCode>;

    fn withdraw(env: Env, sender: Address, token_ids: Vec<u64>) -> Result<(), ErrorCode>;

    fn increase_slot(env: Env, sender: Address, count: u32) -> Result<(), ErrorCode>;

    fn decrease_slot(env: Env, sender: Address, count: u32) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn pending_reward(env: Env, reward_token: Address, depositor: Address) -> Result<i128, ErrorCode>;

    fn query_config(env: Env) -> Result<ConfigResponse, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;

    fn query_depositor(env: Env, depositor: Address) -> Result<DepositorResponse, ErrorCode>;

    fn query_pool_state(env: Env) -> PoolState;

    fn query_reward_tokens(env: Env) -> Vec<Address>;

    fn query_stream(env: Env, reward_token: Address) -> Option<RewardStream>;

    fn query_staked_token(env: Env, token_id: u64) -> Option<StakedToken>;
}
