use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    Address,
    BytesN,
    Env,
    Map,
    Vec,
};

use crate::{
    controller,
    events::PoolEvents,
    msg::{ ConfigResponse, DepositorResponse },
    pool::StakingPoolTrait,
    storage::{
        get_config,
        get_depositor,
        get_pool_state,
        get_reward_tokens,
        get_staked_token,
        get_stream,
        is_initialized,
        save_config,
        set_initialized,
        Config,
        PoolState,
        PowerConfig,
        RewardStream,
        StakedToken,
    },
};

use hashland::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
    math::power::validate_power_config,
    validate,
};

contractmeta!(
    key = "Description",
    val = "Staking pool distributing block rewards to mining NFT holders by power"
);

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPoolTrait for StakingPool {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        mining_nft: Address,
        slot_nft: Address,
        base_capacity: u32,
        capacity_per_slot: u32,
        power_config: PowerConfig
    ) {
        if is_initialized(&env) {
            log!(&env, "StakingPool: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        if capacity_per_slot == 0 {
            log!(&env, "StakingPool: Initialize: a slot token must grant at least one slot");
            panic_with_error!(&env, ErrorCode::InvalidConfig);
        }

        if
            let Err(error) = validate_power_config(
                &env,
                power_config.base_power,
                power_config.level_multiplier
            )
        {
            panic_with_error!(&env, error);
        }

        set_initialized(&env);

        let mut reward_operators = Vec::new(&env);
        reward_operators.push_back(admin.clone());

        save_config(
            &env,
            &(Config {
                admin: admin.clone(),
                mining_nft: mining_nft.clone(),
                slot_nft: slot_nft.clone(),
                base_capacity,
                capacity_per_slot,
                power_config,
                reward_operators,
            })
        );

        PoolEvents::initialize(&env, admin, mining_nft, slot_nft);
    }

    fn update_config(
        env: Env,
        sender: Address,
        new_admin: Option<Address>,
        base_capacity: Option<u32>,
        capacity_per_slot: Option<u32>
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env)?;

        validate!(
            &env,
            config.admin == sender,
            ErrorCode::NotAuthorized,
            "StakingPool: Update config: You are not authorized!"
        )?;

        // lowering capacity could leave a depositor holding more than it allows
        let has_stake = get_pool_state(&env).total_staked_tokens > 0;

        if let Some(new_admin) = new_admin {
            // the operator seat moves with the admin role
            if let Some(id) = config.reward_operators.first_index_of(config.admin.clone()) {
                config.reward_operators.remove(id);
            }
            if !config.reward_operators.contains(new_admin.clone()) {
                config.reward_operators.push_back(new_admin.clone());
            }
            config.admin = new_admin;
        }
        if let Some(base_capacity) = base_capacity {
            validate!(
                &env,
                !has_stake || base_capacity >= config.base_capacity,
                ErrorCode::InvalidConfig,
                "StakingPool: Update config: cannot lower base capacity while tokens are staked"
            )?;
            config.base_capacity = base_capacity;
        }
        if let Some(capacity_per_slot) = capacity_per_slot {
            validate!(&env, capacity_per_slot > 0, ErrorCode::InvalidConfig)?;
            validate!(
                &env,
                !has_stake || capacity_per_slot >= config.capacity_per_slot,
                ErrorCode::InvalidConfig,
                "StakingPool: Update config: cannot lower slot capacity while tokens are staked"
            )?;
            config.capacity_per_slot = capacity_per_slot;
        }

        save_config(&env, &config);

        Ok(())
    }

    fn update_reward_operators(
        env: Env,
        sender: Address,
        to_add: Vec<Address>,
        to_remove: Vec<Address>
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;

        validate!(
            &env,
            config.admin == sender,
            ErrorCode::NotAuthorized,
            "StakingPool: Update reward operators: You are not authorized!"
        )?;

        let mut reward_operators = config.reward_operators.clone();

        to_add.into_iter().for_each(|addr| {
            if !reward_operators.contains(addr.clone()) {
                reward_operators.push_back(addr);
            }
        });

        to_remove.into_iter().for_each(|addr| {
            if let Some(id) = reward_operators.first_index_of(addr) {
                reward_operators.remove(id);
            }
        });

        save_config(&env, &(Config { reward_operators, ..config }));

        Ok(())
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        let admin = get_config(&env)?.admin;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ################################################################
    //                             REWARDS
    // ################################################################

    fn add_reward(
        env: Env,
        sender: Address,
        reward_token: Address,
        amount: i128,
        duration: u32
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::rewards::add_reward(&env, &sender, &reward_token, amount, duration)
    }

    fn harvest_all(
        env: Env,
        sender: Address,
        recipient: Address
    ) -> Result<Map<Address, i128>, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::rewards::harvest_all(&env, &sender, &recipient)
    }

    // ################################################################
    //                             DEPOSITOR
    // ################################################################

    fn deposit(env: Env, sender: Address, token_ids: Vec<u64>) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::stake::deposit(&env, &sender, token_ids)
    }

    fn withdraw(env: Env, sender: Address, token_ids: Vec<u64>) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::stake::withdraw(&env, &sender, token_ids)
    }

    fn increase_slot(env: Env, sender: Address, count: u32) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::slots::increase_slot(&env, &sender, count)
    }

    fn decrease_slot(env: Env, sender: Address, count: u32) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::slots::decrease_slot(&env, &sender, count)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn pending_reward(env: Env, reward_token: Address, depositor: Address) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        controller::rewards::pending_reward(&env, &reward_token, &depositor)
    }

    fn query_config(env: Env) -> Result<ConfigResponse, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        Ok(ConfigResponse {
            config: get_config(&env)?,
        })
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        Ok(get_config(&env)?.admin)
    }

    fn query_depositor(env: Env, depositor: Address) -> Result<DepositorResponse, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env)?;
        let info = get_depositor(&env, &depositor);

        Ok(DepositorResponse {
            power: info.power,
            capacity: info.capacity(&env, &config)?,
            staked_tokens: info.staked_tokens,
            slot_tokens: info.slot_tokens,
        })
    }

    fn query_pool_state(env: Env) -> PoolState {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        get_pool_state(&env)
    }

    fn query_reward_tokens(env: Env) -> Vec<Address> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        get_reward_tokens(&env)
    }

    fn query_stream(env: Env, reward_token: Address) -> Option<RewardStream> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        get_stream(&env, &reward_token)
    }

    fn query_staked_token(env: Env, token_id: u64) -> Option<StakedToken> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        get_staked_token(&env, token_id)
    }
}
