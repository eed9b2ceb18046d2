use soroban_sdk::{contracttype, Address};

/// One asset currently held in rental custody.
///
/// Keyed by `(asset_class, asset_id)` in the rental contract's persistent
/// storage; the key lives outside the record so the two cannot drift. The
/// terms (`end_height`, `price`, `rental_length`) are fixed when the asset is
/// offered and never updated in place — a later rental period does not alter
/// them.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RentalItem {
    /// The depositor; receives rent payments and reclaims the asset on delist.
    pub owner: Address,
    /// Present iff the asset is currently rented out.
    pub renter: Option<Address>,
    /// Ledger sequence after which the asset can no longer be rented
    /// (it remains delistable).
    pub end_height: u32,
    /// Minimum acceptable rent payment, in payment-token units.
    pub price: i128,
    /// Number of ledgers one rental period lasts once started.
    pub rental_length: u32,
}

impl RentalItem {
    /// Returns `true` while the listing can still be rented at
    /// `current_height` (ignores whether it is already rented).
    pub fn is_rentable_at(&self, current_height: u32) -> bool {
        current_height <= self.end_height
    }
}
