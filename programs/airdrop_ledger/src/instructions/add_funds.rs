use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::deposit_lamports;

/**
 * Account context for funding the pool
 *
 * Moves lamports from the owner into the ledger PDA. Allowed in both phases;
 * deposits made after the distribution started do not change the allocation.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddFunds<'info> {
    /// The ledger account receiving the deposit
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// The depositor
    /// - Must be the ledger owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for the lamport transfer
    pub system_program: Program<'info, System>,
}

/**
 * Deposits `amount` lamports into the pool
 *
 * @param ctx - The account context containing ledger and owner accounts
 * @param amount - Lamports to deposit
 */
pub fn handle_add_funds(ctx: Context<AddFunds>, amount: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let owner_key = ctx.accounts.owner.key();

    // ===== EFFECTS PHASE =====
    let pool_balance = ledger.add_funds(&owner_key, amount)?;
    let ledger_key = ledger.key();

    // ===== INTERACTIONS PHASE =====
    deposit_lamports(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    msg!("Deposited {} lamports, pool balance {}", amount, pool_balance);

    emit_cpi!(FundsAdded {
        ledger: ledger_key,
        owner: owner_key,
        amount,
        pool_balance,
    });

    Ok(())
}
