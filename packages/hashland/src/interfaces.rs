use soroban_sdk::{ contractclient, Address, Env };

/// Subset of the non-fungible token interface the staking pool relies on.
///
/// Both the mining NFT and the slot NFT contracts expose it.
#[contractclient(name = "NftClient")]
pub trait NonFungibleInterface {
    fn balance(env: Env, owner: Address) -> u32;

    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Enumerates the tokens of `owner`, `index` in `0..balance(owner)`.
    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> u64;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    /// Moves `token_id` from `from` to `to`. `spender` must be `from` or an approved operator.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

/// Level lookup exposed by the mining NFT contract.
#[contractclient(name = "MiningNftClient")]
pub trait MiningNftInterface {
    fn level(env: Env, token_id: u64) -> u32;
}
