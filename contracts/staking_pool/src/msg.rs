use soroban_sdk::{ contracttype, Vec };

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositorResponse {
    pub power: i128,
    pub capacity: u32,
    pub staked_tokens: Vec<u64>,
    pub slot_tokens: Vec<u64>,
}
