#![no_std]
pub mod asset;
pub mod types;

pub use asset::*;
pub use types::*;

// Token ids in a collection start at 1; 0 is reserved as "never minted".
pub const FIRST_TOKEN_ID: u64 = 1;

// TTL bumps for persistent entries (in ledgers). Soroban ledgers close
// roughly every 5 seconds, so the threshold is ~30 days and the extension
// ~60 days of ledger time.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400;
pub const PERSISTENT_TTL_EXTEND: u32 = 1_036_800;
