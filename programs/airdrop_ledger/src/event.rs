use anchor_lang::prelude::*;

/// Event emitted when the ledger is created
#[event]
pub struct LedgerInitialized {
    /// The ledger account public key
    pub ledger: Pubkey,
    /// Creator, and first owner, of the ledger
    pub owner: Pubkey,
}

/// Event emitted when an address registers for the airdrop
#[event]
pub struct AddressRegistered {
    pub ledger: Pubkey,
    pub account: Pubkey,
    /// Number of registered addresses after this registration
    pub registered_count: u32,
}

/// Event emitted when the owner deposits lamports into the pool
#[event]
pub struct FundsAdded {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    /// Lamports deposited in this transaction
    pub amount: u64,
    /// Pool balance after the deposit
    pub pool_balance: u64,
}

/// Event emitted when the distribution phase begins
#[event]
pub struct DistributionStarted {
    pub ledger: Pubkey,
    /// Per-account payout, fixed for the rest of the ledger's life
    pub allocation: u64,
    /// Number of eligible addresses the pool was split across
    pub registered_count: u32,
    /// Pool balance the allocation was computed from
    pub pool_balance: u64,
}

/// Event emitted when an eligible account claims its allocation
#[event]
pub struct AirdropClaimed {
    /// Address of the claimant
    pub account: Pubkey,
    /// Lamports paid out
    pub amount: u64,
}

/// Event emitted when ownership moves to a new account
#[event]
pub struct OwnerChanged {
    pub ledger: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
