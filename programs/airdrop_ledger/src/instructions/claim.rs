use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::payout_lamports;
use crate::event::*;

/**
 * Account context for claiming an allocation
 *
 * Pays the fixed allocation out of the ledger PDA to an eligible claimant,
 * once per claimant.
 *
 * Access Control: Any registered address that has not claimed yet
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The ledger account paying out
    /// - Will be modified to debit the pool
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// Individual claim status for this claimant
    /// - Derived from: ["claim", ledger_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), ledger.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// The claimant
    /// - Must sign the transaction
    /// - Receives the allocation in lamports
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim
 *
 * Validation Process:
 * 1. Distribution has started
 * 2. Claimant is registered
 * 3. Claimant has not claimed before
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let claimant_key = ctx.accounts.claimant.key();

    // ===== EFFECTS PHASE (State Updates) =====

    // Claim status and pool are settled before any lamports move
    let ledger = &mut ctx.accounts.ledger;
    let claim_status = &mut ctx.accounts.claim_status;
    let amount = ledger.claim(claim_status, &claimant_key)?;

    // ===== INTERACTIONS PHASE (Lamport Transfer) =====

    payout_lamports(
        &ctx.accounts.ledger.to_account_info(),
        &ctx.accounts.claimant.to_account_info(),
        amount,
    )?;

    msg!("{} claimed {} lamports", claimant_key, amount);

    emit_cpi!(AirdropClaimed {
        account: claimant_key,
        amount,
    });

    Ok(())
}
