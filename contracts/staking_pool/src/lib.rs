#![no_std]

mod contract;
mod controller;
mod events;
pub mod msg;
mod pool;
pub mod storage;

pub use contract::{ StakingPool, StakingPoolClient };
pub use hashland::error::ErrorCode;
