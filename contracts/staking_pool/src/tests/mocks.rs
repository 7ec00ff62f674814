use hashland::interfaces::{ MiningNftInterface, NonFungibleInterface };
use soroban_sdk::{ contract, contractimpl, contracttype, Address, Env, Vec };

#[derive(Clone)]
#[contracttype]
enum MockNftKey {
    LastId,
    Owner(u64),
    Level(u64),
    Owned(Address),
    Operator(Address, Address),
}

fn owned_tokens(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&MockNftKey::Owned(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

fn set_owner(env: &Env, token_id: u64, owner: &Address) {
    env.storage().instance().set(&MockNftKey::Owner(token_id), owner);

    let mut tokens = owned_tokens(env, owner);
    tokens.push_back(token_id);
    env.storage().instance().set(&MockNftKey::Owned(owner.clone()), &tokens);
}

/// Enumerable NFT with levels, standing in for both the mining and the slot token.
#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    /// Mints the next id, starting from 1.
    pub fn mint(env: Env, to: Address, level: u32) -> u64 {
        let token_id: u64 = env.storage().instance().get(&MockNftKey::LastId).unwrap_or(0) + 1;
        env.storage().instance().set(&MockNftKey::LastId, &token_id);
        env.storage().instance().set(&MockNftKey::Level(token_id), &level);
        set_owner(&env, token_id, &to);

        token_id
    }

    pub fn approve_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage().instance().set(&MockNftKey::Operator(owner, operator), &approved);
    }
}

#[contractimpl]
impl NonFungibleInterface for MockNft {
    fn balance(env: Env, owner: Address) -> u32 {
        owned_tokens(&env, &owner).len()
    }

    fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockNftKey::Owner(token_id))
            .expect("token does not exist")
    }

    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> u64 {
        owned_tokens(&env, &owner).get(index).expect("index out of bounds")
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .instance()
            .get(&MockNftKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64) {
        spender.require_auth();

        let owner = Self::owner_of(env.clone(), token_id);
        assert_eq!(owner, from, "transfer from non owner");
        assert!(
            spender == from || Self::is_approved_for_all(env.clone(), from.clone(), spender),
            "spender not approved"
        );

        let mut tokens = owned_tokens(&env, &from);
        if let Some(index) = tokens.first_index_of(token_id) {
            tokens.remove(index);
        }
        env.storage().instance().set(&MockNftKey::Owned(from), &tokens);

        set_owner(&env, token_id, &to);
    }
}

#[contractimpl]
impl MiningNftInterface for MockNft {
    fn level(env: Env, token_id: u64) -> u32 {
        env.storage()
            .instance()
            .get(&MockNftKey::Level(token_id))
            .expect("token does not exist")
    }
}
