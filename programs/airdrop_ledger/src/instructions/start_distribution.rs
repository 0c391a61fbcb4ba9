use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for starting the distribution
 *
 * Splits the current pool evenly across the registered addresses and closes
 * registration for good.
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - allocation = floor(pool_balance / registered count), computed once
 * - The floor remainder stays in the ledger and is never claimable
 * - Later deposits only grow the idle remainder
 */
#[event_cpi]
#[derive(Accounts)]
pub struct StartDistribution<'info> {
    /// The ledger account
    /// - Will be modified to set allocation and started
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// Must be the ledger owner
    pub owner: Signer<'info>,
}

pub fn handle_start_distribution(ctx: Context<StartDistribution>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    let allocation = ledger.start_distribution(&ctx.accounts.owner.key())?;

    let ledger_key = ledger.key();
    let registered_count = ledger.registered.len() as u32;
    let pool_balance = ledger.pool_balance;

    msg!(
        "Distribution started: {} lamports to each of {} addresses",
        allocation,
        registered_count
    );

    emit_cpi!(DistributionStarted {
        ledger: ledger_key,
        allocation,
        registered_count,
        pool_balance,
    });

    Ok(())
}
