use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for creating the airdrop ledger
 *
 * The ledger PDA has a fixed seed, so it can be created exactly once per
 * program deployment; a second attempt fails because the account exists.
 *
 * Access Control: Anyone may create it; the creator becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    /// The ledger account (PDA)
    /// - Stores the full registration and distribution state
    /// - Holds the pool lamports on top of its rent reserve
    /// - Derived from: ["ledger"]
    #[account(
        init,
        payer = owner,
        space = AirdropLedger::LEN,
        seeds = [LEDGER_SEED.as_bytes()],
        bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// The creator of the ledger
    /// - Pays for the ledger account
    /// - Becomes the first owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let owner_key = ctx.accounts.owner.key();

    ledger.initialize(owner_key, ctx.bumps.ledger);
    let ledger_key = ledger.key();

    msg!("Ledger {} created, owner {}", ledger_key, owner_key);

    emit_cpi!(LedgerInitialized {
        ledger: ledger_key,
        owner: owner_key,
    });

    Ok(())
}
