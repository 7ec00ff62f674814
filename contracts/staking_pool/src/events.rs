use soroban_sdk::{ Address, Env, Symbol, Vec };

pub struct PoolEvents {}

impl PoolEvents {
    /// Emitted when the pool is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[mining_nft: Address, slot_nft: Address]`
    pub fn initialize(env: &Env, admin: Address, mining_nft: Address, slot_nft: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (mining_nft, slot_nft));
    }

    /// Emitted when mining tokens are staked
    ///
    /// - topics - `["deposit", depositor: Address]`
    /// - data - `[token_ids: Vec<u64>, power: i128]`
    pub fn deposit(env: &Env, depositor: Address, token_ids: Vec<u64>, power: i128) {
        let topics = (Symbol::new(env, "deposit"), depositor);
        env.events().publish(topics, (token_ids, power));
    }

    /// Emitted when mining tokens are unstaked
    ///
    /// - topics - `["withdraw", depositor: Address]`
    /// - data - `[token_ids: Vec<u64>, power: i128]`
    pub fn withdraw(env: &Env, depositor: Address, token_ids: Vec<u64>, power: i128) {
        let topics = (Symbol::new(env, "withdraw"), depositor);
        env.events().publish(topics, (token_ids, power));
    }

    /// Emitted when a reward stream is funded
    ///
    /// - topics - `["add_reward", funder: Address, token: Address]`
    /// - data - `[amount: i128, duration: u32, reward_rate: i128]`
    pub fn add_reward(
        env: &Env,
        funder: Address,
        token: Address,
        amount: i128,
        duration: u32,
        reward_rate: i128
    ) {
        let topics = (Symbol::new(env, "add_reward"), funder, token);
        env.events().publish(topics, (amount, duration, reward_rate));
    }

    /// Emitted for every stream paid out by a harvest
    ///
    /// - topics - `["harvest", depositor: Address, token: Address]`
    /// - data - `[recipient: Address, amount: i128]`
    pub fn harvest(env: &Env, depositor: Address, token: Address, recipient: Address, amount: i128) {
        let topics = (Symbol::new(env, "harvest"), depositor, token);
        env.events().publish(topics, (recipient, amount));
    }

    /// Emitted when slot tokens are staked
    ///
    /// - topics - `["increase_slot", depositor: Address]`
    /// - data - `[slot_ids: Vec<u64>, capacity: u32]`
    pub fn increase_slot(env: &Env, depositor: Address, slot_ids: Vec<u64>, capacity: u32) {
        let topics = (Symbol::new(env, "increase_slot"), depositor);
        env.events().publish(topics, (slot_ids, capacity));
    }

    /// Emitted when slot tokens are returned
    ///
    /// - topics - `["decrease_slot", depositor: Address]`
    /// - data - `[slot_ids: Vec<u64>, capacity: u32]`
    pub fn decrease_slot(env: &Env, depositor: Address, slot_ids: Vec<u64>, capacity: u32) {
        let topics = (Symbol::new(env, "decrease_slot"), depositor);
        env.events().publish(topics, (slot_ids, capacity));
    }
}
