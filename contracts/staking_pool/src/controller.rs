pub mod rewards;
pub mod slots;
pub mod stake;
