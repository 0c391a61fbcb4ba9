use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;

/// Read-only access to the ledger for the view instructions
#[derive(Accounts)]
pub struct ViewLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,
}

/**
 * Account context for looking up a claim record
 *
 * The claim status PDA only exists once its claimant has attempted a claim,
 * so it is taken unchecked and read only when it carries data.
 */
#[derive(Accounts)]
#[instruction(claimant: Pubkey)]
pub struct ViewClaim<'info> {
    #[account(
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// CHECK: Either empty or a ClaimStatus owned by this program, verified in the handler
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), ledger.key().as_ref(), claimant.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

pub fn handle_is_eligible(ctx: Context<ViewLedger>, account: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.ledger.is_eligible(&account))
}

pub fn handle_view_addresses(ctx: Context<ViewLedger>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.ledger.view_addresses())
}

pub fn handle_view_allocation(ctx: Context<ViewLedger>) -> Result<u64> {
    Ok(ctx.accounts.ledger.view_allocation())
}

pub fn handle_view_owner(ctx: Context<ViewLedger>) -> Result<Pubkey> {
    Ok(ctx.accounts.ledger.owner)
}

pub fn handle_airdrop_started(ctx: Context<ViewLedger>) -> Result<bool> {
    Ok(ctx.accounts.ledger.started)
}

pub fn handle_has_claimed(ctx: Context<ViewClaim>, _claimant: Pubkey) -> Result<bool> {
    let claim_status = &ctx.accounts.claim_status;

    // No record yet means no claim
    if claim_status.data_is_empty() {
        return Ok(false);
    }

    require_keys_eq!(
        *claim_status.owner,
        crate::ID,
        AirdropError::InvalidClaimStatus
    );

    let data = claim_status.try_borrow_data()?;
    let status = ClaimStatus::try_deserialize(&mut data.as_ref())?;
    Ok(status.claimed)
}
