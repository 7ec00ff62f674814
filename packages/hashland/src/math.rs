pub mod casting;
pub mod power;
pub mod rewards;
pub mod safe_math;
