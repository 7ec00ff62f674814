use soroban_sdk::{ log, Env };

use crate::error::{ ErrorCode, HashlandResult };

pub trait Cast: Sized {
    /// Perform a checked integer conversion, logging on failure.
    #[track_caller]
    #[inline(always)]
    fn cast<T: CastFrom<Self>>(self, env: &Env) -> HashlandResult<T> {
        T::cast_from(self, env)
    }
}

pub trait CastFrom<T>: Sized {
    fn cast_from(value: T, env: &Env) -> HashlandResult<Self>;
}

macro_rules! impl_cast {
    ($src:ty, $dst:ty) => {
        impl CastFrom<$src> for $dst {
            fn cast_from(value: $src, env: &Env) -> HashlandResult<Self> {
                value.try_into().map_err(|_| {
                    log!(env, "Casting error: value {} out of range", value);
                    ErrorCode::CastingFailure
                })
            }
        }
    };
}

impl Cast for u32 {}
impl Cast for u64 {}
impl Cast for i128 {}

impl_cast!(u32, i128);
impl_cast!(u64, i128);
impl_cast!(i128, u32);
impl_cast!(i128, u64);
impl_cast!(u32, u64);
impl_cast!(u64, u32);
