use soroban_sdk::contracterror;

pub type HashlandResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    /// ESLOT
    SlotCapacityExceeded = 4,
    NotTokenOwner = 5,
    NotStakedByCaller = 6,
    InsufficientApproval = 7,
    InsufficientBalance = 8,
    InvalidSchedule = 9,
    EmptyTokenList = 10,
    DuplicateTokenId = 11,
    InvalidTokenLevel = 12,
    TooManyRewardStreams = 13,
    InvalidSlotCount = 14,
    SlotsInUse = 15,
    InvalidConfig = 16,
    MathError = 17,
    CastingFailure = 18,
}
