use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * Records whether a claimant has already pulled their allocation.
 *
 * Derivation: ["claim", ledger_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed)
 * 2. Marked claimed by the successful claim, never cleared
 *
 * A claimant without this account has not claimed.
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Set by the one successful claim
    pub claimed: bool,

    /// Lamports paid out by that claim
    pub claimed_amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + 1 + 8;
}
