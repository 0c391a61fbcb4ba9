use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for transferring ownership
 *
 * The previous owner loses funding, start and ownership rights as soon as
 * this instruction lands.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ChangeOwner<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// Must be the current ledger owner
    pub owner: Signer<'info>,
}

pub fn handle_change_owner(ctx: Context<ChangeOwner>, new_owner: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    let previous_owner = ledger.change_owner(&ctx.accounts.owner.key(), new_owner)?;
    let ledger_key = ledger.key();

    msg!("Ownership moved from {} to {}", previous_owner, new_owner);

    emit_cpi!(OwnerChanged {
        ledger: ledger_key,
        previous_owner,
        new_owner,
    });

    Ok(())
}
