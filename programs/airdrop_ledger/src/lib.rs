use anchor_lang::prelude::*;

declare_id!("6C2KrMjS5GyGchxNPezKuvCAX6AeTKZ4Mn5YhRTreQxn");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Ledger Program
 *
 * A Solana program that splits a lamport pool evenly across every address
 * that registered before the distribution started.
 *
 * Key Features:
 * - Open registration for any address holding at least 1 SOL
 * - Single owner who funds the pool, starts the distribution and can hand over ownership
 * - One-time equal split: allocation = floor(pool / registered addresses)
 * - Pull-based claims, at most one per address
 * - Cross-program call event emission for composability
 *
 * Architecture:
 * - Ledger PDA: Stores the registry and distribution state, holds the pool lamports
 * - Claim Status PDAs: Track whether each address has claimed
 *
 * Workflow:
 * 1. Creator initializes the ledger and becomes owner
 * 2. Addresses register while the ledger is in its registration phase
 * 3. Owner deposits lamports (before or after start)
 * 4. Owner starts the distribution, fixing the allocation
 * 5. Each registered address claims its allocation once
 */
#[program]
pub mod airdrop_ledger {
    use super::*;

    /**
     * Creates the airdrop ledger
     *
     * @param ctx - Account context containing the ledger and creator accounts
     *
     * Access Control: Anyone, once per deployment; the creator becomes owner
     */
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        handle_initialize_ledger(ctx)
    }

    /**
     * Registers the signer as eligible for the airdrop
     *
     * @param ctx - Account context containing the ledger and participant accounts
     *
     * Access Control: Any signer holding at least 1 SOL, registration phase only
     */
    pub fn register(ctx: Context<Register>) -> Result<()> {
        handle_register(ctx)
    }

    /**
     * Deposits lamports into the pool
     *
     * @param ctx - Account context containing the ledger and owner accounts
     * @param amount - Lamports to deposit
     *
     * Access Control: Owner only
     * Note: Deposits after start do not change the allocation
     */
    pub fn add_funds(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
        handle_add_funds(ctx, amount)
    }

    /**
     * Starts the distribution
     *
     * Computes the per-address allocation from the current pool balance and
     * closes registration permanently.
     *
     * @param ctx - Account context containing the ledger and owner accounts
     *
     * Access Control: Owner only
     */
    pub fn start_distribution(ctx: Context<StartDistribution>) -> Result<()> {
        handle_start_distribution(ctx)
    }

    /**
     * Claims the signer's allocation
     *
     * @param ctx - Account context containing ledger, claim status and claimant accounts
     *
     * Access Control: Registered addresses, once each, after start
     */
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        handle_claim(ctx)
    }

    /**
     * Transfers ownership of the ledger
     *
     * @param ctx - Account context containing the ledger and current owner accounts
     * @param new_owner - Account receiving administrative rights
     *
     * Access Control: Owner only
     */
    pub fn change_owner(ctx: Context<ChangeOwner>, new_owner: Pubkey) -> Result<()> {
        handle_change_owner(ctx, new_owner)
    }

    /// Whether `account` is registered
    pub fn is_eligible(ctx: Context<ViewLedger>, account: Pubkey) -> Result<bool> {
        handle_is_eligible(ctx, account)
    }

    /// Registered addresses in registration order
    pub fn view_addresses(ctx: Context<ViewLedger>) -> Result<Vec<Pubkey>> {
        handle_view_addresses(ctx)
    }

    /// Per-address allocation, 0 before the distribution starts
    pub fn view_allocation(ctx: Context<ViewLedger>) -> Result<u64> {
        handle_view_allocation(ctx)
    }

    pub fn view_owner(ctx: Context<ViewLedger>) -> Result<Pubkey> {
        handle_view_owner(ctx)
    }

    pub fn airdrop_started(ctx: Context<ViewLedger>) -> Result<bool> {
        handle_airdrop_started(ctx)
    }

    /// Whether `claimant` has already claimed
    pub fn has_claimed(ctx: Context<ViewClaim>, claimant: Pubkey) -> Result<bool> {
        handle_has_claimed(ctx, claimant)
    }
}
