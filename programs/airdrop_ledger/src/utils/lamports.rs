use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::error::*;

/// Moves lamports from a signer into the ledger through the system program
pub fn deposit_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer { from, to };
    transfer(CpiContext::new(system_program, cpi_accounts), amount)
}

/// Pays lamports out of a program-owned account
///
/// The ledger PDA carries data, so the system program cannot debit it;
/// the balance is edited directly instead, which issues no CPI.
pub fn payout_lamports<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(AirdropError::InsufficientPoolBalance)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}
