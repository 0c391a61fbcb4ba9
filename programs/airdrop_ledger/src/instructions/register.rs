use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for registering an address
 *
 * Adds the signer to the eligible set while the ledger is still in its
 * registration phase.
 *
 * Access Control: Any signer holding at least MIN_REGISTRATION_BALANCE lamports
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Register<'info> {
    /// The ledger account
    /// - Will be modified to append the participant
    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, AirdropLedger>,

    /// The address registering for the airdrop
    /// - Its current lamport balance is the eligibility check
    pub participant: Signer<'info>,
}

/**
 * Registers the signer as an eligible address
 *
 * Validation Process:
 * 1. Participant holds at least 1 SOL
 * 2. Participant is not registered yet
 * 3. Distribution has not started
 * 4. Registry still has room
 */
pub fn handle_register(ctx: Context<Register>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let participant = &ctx.accounts.participant;

    ledger.register(participant.key(), participant.lamports())?;

    let ledger_key = ledger.key();
    let registered_count = ledger.registered.len() as u32;

    msg!("Registered {} ({} eligible)", participant.key(), registered_count);

    emit_cpi!(AddressRegistered {
        ledger: ledger_key,
        account: participant.key(),
        registered_count,
    });

    Ok(())
}
