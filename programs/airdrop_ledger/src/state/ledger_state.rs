use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::ClaimStatus;

/**
 * Airdrop ledger state account
 *
 * Holds the whole registration / funding / distribution state machine.
 * The account's lamports back `pool_balance`; the rent-exempt reserve on top
 * of it is never paid out.
 *
 * Derivation: ["ledger"]
 *
 * Lifecycle:
 * 1. Created by initialize_ledger, creator becomes owner
 * 2. Registration phase: addresses register, owner adds funds
 * 3. start_distribution fixes the allocation and flips `started`
 * 4. Distribution phase: each eligible address claims once
 *
 * There is no teardown and no way back to the registration phase.
 */
#[account]
#[derive(Default, Debug)]
pub struct AirdropLedger {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Account with administrative rights
    /// - Can add funds, start the distribution and hand over ownership
    pub owner: Pubkey,

    /// Set once by start_distribution, never reset
    pub started: bool,

    /// Per-account payout in lamports
    /// - floor(pool_balance_at_start / registered.len())
    /// - Zero until the distribution starts, immutable afterwards
    pub allocation: u64,

    /// Lamports held for distribution (excludes rent reserve)
    pub pool_balance: u64,

    /// Lamports ever deposited through add_funds
    pub total_deposited: u64,

    /// Lamports ever paid out through claim
    pub total_claimed: u64,

    /// Number of successful claims
    pub claim_count: u32,

    /// Eligible addresses in registration order
    pub registered: Vec<Pubkey>,
}

impl AirdropLedger {
    /// Calculate the space required for this account
    /// - 8-byte discriminator, fixed fields, then the registry at full capacity
    pub const LEN: usize = 8 // discriminator
        + 1 // bump
        + 32 // owner
        + 1 // started
        + 8 // allocation
        + 8 // pool_balance
        + 8 // total_deposited
        + 8 // total_claimed
        + 4 // claim_count
        + 4 + 32 * MAX_PARTICIPANTS; // registered

    pub fn initialize(&mut self, owner: Pubkey, bump: u8) {
        self.bump = bump;
        self.owner = owner;
        // Note: started, allocation, balances and registry keep their defaults
    }

    pub fn is_eligible(&self, account: &Pubkey) -> bool {
        self.registered.contains(account)
    }

    pub fn view_addresses(&self) -> Vec<Pubkey> {
        self.registered.clone()
    }

    pub fn view_allocation(&self) -> u64 {
        if self.started {
            self.allocation
        } else {
            0
        }
    }

    /// Lamports that floor division left behind and no claim will ever move
    pub fn remainder(&self) -> u64 {
        let unclaimed = (self.registered.len() as u64).saturating_sub(self.claim_count as u64);
        self.pool_balance
            .saturating_sub(self.allocation.saturating_mul(unclaimed))
    }

    fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, AirdropError::NotOwner);
        Ok(())
    }

    /**
     * Appends `caller` to the registry
     *
     * Checks run in a fixed order: holdings, duplicate, phase, capacity.
     * `caller_balance` is the caller's own lamport balance at call time.
     */
    pub fn register(&mut self, caller: Pubkey, caller_balance: u64) -> Result<()> {
        require!(
            caller_balance >= MIN_REGISTRATION_BALANCE,
            AirdropError::InsufficientBalance
        );
        require!(!self.is_eligible(&caller), AirdropError::AlreadyRegistered);
        require!(!self.started, AirdropError::DistributionAlreadyStarted);
        require!(
            self.registered.len() < MAX_PARTICIPANTS,
            AirdropError::RegistryFull
        );

        self.registered.push(caller);
        Ok(())
    }

    /// Credits `amount` to the pool; allowed in either phase
    pub fn add_funds(&mut self, caller: &Pubkey, amount: u64) -> Result<u64> {
        self.require_owner(caller)?;

        let pool_balance = self.pool_balance
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let total_deposited = self.total_deposited
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        self.pool_balance = pool_balance;
        self.total_deposited = total_deposited;
        Ok(pool_balance)
    }

    /// Fixes the allocation and opens the claim phase. Returns the allocation.
    pub fn start_distribution(&mut self, caller: &Pubkey) -> Result<u64> {
        self.require_owner(caller)?;
        require!(!self.started, AirdropError::DistributionAlreadyStarted);
        require!(!self.registered.is_empty(), AirdropError::NoEligibleAddresses);

        let allocation = self.pool_balance
            .checked_div(self.registered.len() as u64)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        self.allocation = allocation;
        self.started = true;
        Ok(allocation)
    }

    /**
     * Records a claim for `caller` and debits the pool
     *
     * Only bookkeeping happens here: the caller must move `allocation`
     * lamports out of the ledger account after this returns.
     *
     * Returns the amount to pay out.
     */
    pub fn claim(&mut self, claim_status: &mut ClaimStatus, caller: &Pubkey) -> Result<u64> {
        require!(self.started, AirdropError::DistributionNotStarted);
        require!(self.is_eligible(caller), AirdropError::NotEligible);
        require!(!claim_status.claimed, AirdropError::AlreadyClaimed);

        let amount = self.allocation;
        let pool_balance = self.pool_balance
            .checked_sub(amount)
            .ok_or(AirdropError::InsufficientPoolBalance)?;
        let total_claimed = self.total_claimed
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        let claim_count = self.claim_count
            .checked_add(1)
            .ok_or(AirdropError::ArithmeticOverflow)?;

        claim_status.claimed = true;
        claim_status.claimed_amount = amount;

        self.pool_balance = pool_balance;
        self.total_claimed = total_claimed;
        self.claim_count = claim_count;
        Ok(amount)
    }

    /// Hands administrative rights to `new_owner`. Returns the previous owner.
    pub fn change_owner(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        require!(new_owner != Pubkey::default(), AirdropError::InvalidOwner);

        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(previous_owner)
    }
}
