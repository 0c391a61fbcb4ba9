use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::*;
use crate::error::AirdropError;
use crate::state::{AirdropLedger, ClaimStatus};

fn account(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

fn owner() -> Pubkey {
    account(1)
}

fn new_ledger() -> AirdropLedger {
    let mut ledger = AirdropLedger::default();
    ledger.initialize(owner(), 254);
    ledger
}

fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => {
            panic!("expected an AirdropError, got program error {:?}", e)
        }
    }
}

fn assert_fails<T: std::fmt::Debug>(result: Result<T>, expected: AirdropError) {
    let name = format!("{:?}", expected);
    let err = result.expect_err("operation should have failed");
    assert_eq!(error_code(err), u32::from(expected), "expected {}", name);
}

/// Ledger with `participants` registered, funded with `pool` lamports and started
fn started_ledger(participants: &[Pubkey], pool: u64) -> AirdropLedger {
    let mut ledger = new_ledger();
    for participant in participants {
        ledger.register(*participant, LAMPORTS_PER_SOL).unwrap();
    }
    ledger.add_funds(&owner(), pool).unwrap();
    ledger.start_distribution(&owner()).unwrap();
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== REGISTRATION PHASE =====

    #[test]
    fn test_initialize_sets_owner_and_empty_state() {
        let ledger = new_ledger();

        assert_eq!(ledger.owner, owner());
        assert_eq!(ledger.bump, 254);
        assert!(!ledger.started);
        assert_eq!(ledger.pool_balance, 0);
        assert_eq!(ledger.view_allocation(), 0);
        assert!(ledger.view_addresses().is_empty());
    }

    #[test]
    fn test_register_with_one_sol() {
        let mut ledger = new_ledger();
        let user = account(2);

        ledger.register(user, LAMPORTS_PER_SOL).unwrap();

        assert!(ledger.is_eligible(&user));
        assert_eq!(ledger.view_addresses(), vec![user]);
    }

    #[test]
    fn test_register_below_one_sol_rejected() {
        let mut ledger = new_ledger();
        let user = account(2);

        assert_fails(
            ledger.register(user, LAMPORTS_PER_SOL - 1),
            AirdropError::InsufficientBalance,
        );
        assert!(!ledger.is_eligible(&user));
    }

    #[test]
    fn test_register_keeps_insertion_order() {
        let mut ledger = new_ledger();
        let users = [account(9), account(3), account(7)];

        for user in users {
            ledger.register(user, 5 * LAMPORTS_PER_SOL).unwrap();
        }

        assert_eq!(ledger.view_addresses(), users.to_vec());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut ledger = new_ledger();
        let user = account(2);

        ledger.register(user, LAMPORTS_PER_SOL).unwrap();
        assert_fails(
            ledger.register(user, LAMPORTS_PER_SOL),
            AirdropError::AlreadyRegistered,
        );
        assert_eq!(ledger.view_addresses().len(), 1);
    }

    #[test]
    fn test_registration_after_start_rejected() {
        let mut ledger = started_ledger(&[account(2), account(3)], 2 * LAMPORTS_PER_SOL);

        assert_fails(
            ledger.register(account(4), LAMPORTS_PER_SOL),
            AirdropError::DistributionAlreadyStarted,
        );
        // The owner cannot register late either
        assert_fails(
            ledger.register(owner(), LAMPORTS_PER_SOL),
            AirdropError::DistributionAlreadyStarted,
        );
        assert_eq!(ledger.view_addresses().len(), 2);
    }

    #[test]
    fn test_register_check_order() {
        let mut ledger = started_ledger(&[account(2)], LAMPORTS_PER_SOL);

        // Balance is checked before anything else
        assert_fails(ledger.register(account(2), 0), AirdropError::InsufficientBalance);
        // Then duplicates, then the phase
        assert_fails(
            ledger.register(account(2), LAMPORTS_PER_SOL),
            AirdropError::AlreadyRegistered,
        );
    }

    #[test]
    fn test_registry_capacity() {
        let mut ledger = new_ledger();
        for i in 0..MAX_PARTICIPANTS {
            let mut key = [0u8; 32];
            key[..8].copy_from_slice(&(i as u64).to_le_bytes());
            key[31] = 0xAA;
            ledger.register(Pubkey::new_from_array(key), LAMPORTS_PER_SOL).unwrap();
        }

        assert_fails(
            ledger.register(account(2), LAMPORTS_PER_SOL),
            AirdropError::RegistryFull,
        );
        assert_eq!(ledger.view_addresses().len(), MAX_PARTICIPANTS);
    }

    #[test]
    fn test_ledger_len_fits_full_registry() {
        let mut ledger = new_ledger();
        ledger.registered = (0..MAX_PARTICIPANTS).map(|_| account(2)).collect();

        let mut data = Vec::new();
        ledger.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), AirdropLedger::LEN);

        let status = ClaimStatus { claimed: true, claimed_amount: u64::MAX };
        let mut data = Vec::new();
        status.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), ClaimStatus::LEN);
    }

    // ===== FUNDING & START =====

    #[test]
    fn test_only_owner_can_add_funds() {
        let mut ledger = new_ledger();

        assert_fails(ledger.add_funds(&account(2), LAMPORTS_PER_SOL), AirdropError::NotOwner);
        assert_eq!(ledger.pool_balance, 0);

        assert_eq!(ledger.add_funds(&owner(), LAMPORTS_PER_SOL).unwrap(), LAMPORTS_PER_SOL);
        assert_eq!(ledger.pool_balance, LAMPORTS_PER_SOL);
        assert_eq!(ledger.total_deposited, LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_add_funds_overflow_rejected() {
        let mut ledger = new_ledger();
        ledger.add_funds(&owner(), u64::MAX).unwrap();

        assert_fails(ledger.add_funds(&owner(), 1), AirdropError::ArithmeticOverflow);
        assert_eq!(ledger.pool_balance, u64::MAX);
    }

    #[test]
    fn test_start_without_participants_rejected() {
        let mut ledger = new_ledger();
        ledger.add_funds(&owner(), LAMPORTS_PER_SOL).unwrap();

        assert_fails(ledger.start_distribution(&owner()), AirdropError::NoEligibleAddresses);
        assert!(!ledger.started);
    }

    #[test]
    fn test_non_owner_cannot_start() {
        let mut ledger = new_ledger();
        ledger.register(account(2), LAMPORTS_PER_SOL).unwrap();

        assert_fails(ledger.start_distribution(&account(2)), AirdropError::NotOwner);
        assert!(!ledger.started);
    }

    #[test]
    fn test_owner_check_precedes_empty_registry_check() {
        let mut ledger = new_ledger();

        assert_fails(ledger.start_distribution(&account(2)), AirdropError::NotOwner);
    }

    #[test]
    fn test_start_computes_fractional_allocation() {
        // 3 SOL across 2 addresses -> 1.5 SOL each
        let ledger = started_ledger(&[account(2), account(3)], 3 * LAMPORTS_PER_SOL);

        assert!(ledger.started);
        assert_eq!(ledger.allocation, 1_500_000_000);
        assert_eq!(ledger.view_allocation(), 1_500_000_000);
    }

    #[test]
    fn test_start_floors_allocation() {
        let ledger = started_ledger(&[account(2), account(3), account(4)], 10);

        assert_eq!(ledger.view_allocation(), 3);
        assert_eq!(ledger.remainder(), 1);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut ledger = started_ledger(&[account(2)], LAMPORTS_PER_SOL);

        assert_fails(
            ledger.start_distribution(&owner()),
            AirdropError::DistributionAlreadyStarted,
        );
        assert_eq!(ledger.view_allocation(), LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_funds_after_start_keep_allocation() {
        let mut ledger = started_ledger(&[account(2), account(3)], 2 * LAMPORTS_PER_SOL);

        ledger.add_funds(&owner(), 5 * LAMPORTS_PER_SOL).unwrap();

        assert_eq!(ledger.view_allocation(), LAMPORTS_PER_SOL);
        assert_eq!(ledger.pool_balance, 7 * LAMPORTS_PER_SOL);
    }

    // ===== CLAIM PHASE =====

    #[test]
    fn test_claim_pays_exact_allocation() {
        let user = account(2);
        let mut ledger = started_ledger(&[user, account(3)], 2 * LAMPORTS_PER_SOL);
        let mut status = ClaimStatus::default();

        let amount = ledger.claim(&mut status, &user).unwrap();

        assert_eq!(amount, LAMPORTS_PER_SOL);
        assert!(status.claimed);
        assert_eq!(status.claimed_amount, LAMPORTS_PER_SOL);
        assert_eq!(ledger.pool_balance, LAMPORTS_PER_SOL);
        assert_eq!(ledger.total_claimed, LAMPORTS_PER_SOL);
        assert_eq!(ledger.claim_count, 1);
    }

    #[test]
    fn test_double_claim_rejected() {
        let user = account(2);
        let mut ledger = started_ledger(&[user, account(3)], 2 * LAMPORTS_PER_SOL);
        let mut status = ClaimStatus::default();

        ledger.claim(&mut status, &user).unwrap();
        assert_fails(ledger.claim(&mut status, &user), AirdropError::AlreadyClaimed);

        assert_eq!(ledger.pool_balance, LAMPORTS_PER_SOL);
        assert_eq!(ledger.claim_count, 1);
    }

    #[test]
    fn test_ineligible_claim_rejected() {
        let mut ledger = started_ledger(&[account(2), account(3)], 2 * LAMPORTS_PER_SOL);
        let mut status = ClaimStatus::default();

        assert_fails(ledger.claim(&mut status, &account(9)), AirdropError::NotEligible);
        assert_fails(ledger.claim(&mut status, &owner()), AirdropError::NotEligible);

        assert!(!status.claimed);
        assert_eq!(ledger.pool_balance, 2 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_claim_before_start_rejected() {
        let user = account(2);
        let mut ledger = new_ledger();
        ledger.register(user, LAMPORTS_PER_SOL).unwrap();
        ledger.add_funds(&owner(), LAMPORTS_PER_SOL).unwrap();
        let mut status = ClaimStatus::default();

        assert_fails(ledger.claim(&mut status, &user), AirdropError::DistributionNotStarted);
        assert!(!status.claimed);
    }

    #[test]
    fn test_second_user_claims_independently() {
        let (first, second) = (account(2), account(3));
        let mut ledger = started_ledger(&[first, second], 2 * LAMPORTS_PER_SOL);
        let mut second_status = ClaimStatus::default();

        ledger.claim(&mut second_status, &second).unwrap();

        assert!(second_status.claimed);
        assert_eq!(ledger.claim_count, 1);
    }

    #[test]
    fn test_claim_with_empty_pool_pays_zero() {
        let user = account(2);
        let mut ledger = started_ledger(&[user], 0);
        let mut status = ClaimStatus::default();

        assert_eq!(ledger.claim(&mut status, &user).unwrap(), 0);
        assert!(status.claimed);
        assert_fails(ledger.claim(&mut status, &user), AirdropError::AlreadyClaimed);
    }

    #[test]
    fn test_conservation_leaves_floor_remainder() {
        let users: Vec<Pubkey> = (2..9).map(account).collect();
        let pool = 10 * LAMPORTS_PER_SOL + 5;
        let mut ledger = started_ledger(&users, pool);

        let mut paid = 0u64;
        for user in &users {
            let mut status = ClaimStatus::default();
            paid += ledger.claim(&mut status, user).unwrap();
        }

        let participants = users.len() as u64;
        assert!(paid <= ledger.total_deposited);
        assert_eq!(paid, ledger.total_claimed);
        assert_eq!(ledger.pool_balance, pool % participants);
        assert!(ledger.pool_balance < participants);
        assert_eq!(ledger.remainder(), ledger.pool_balance);
    }

    #[test]
    fn test_remainder_with_even_split() {
        let (first, second) = (account(2), account(3));
        let mut ledger = started_ledger(&[first, second], 2 * LAMPORTS_PER_SOL);

        ledger.claim(&mut ClaimStatus::default(), &first).unwrap();
        ledger.claim(&mut ClaimStatus::default(), &second).unwrap();

        assert_eq!(ledger.pool_balance, 0);
        assert_eq!(ledger.remainder(), 0);
    }

    // ===== OWNERSHIP =====

    #[test]
    fn test_owner_can_change_ownership() {
        let mut ledger = new_ledger();
        let new_owner = account(2);

        assert_eq!(ledger.change_owner(&owner(), new_owner).unwrap(), owner());
        assert_eq!(ledger.owner, new_owner);
    }

    #[test]
    fn test_non_owner_cannot_change_ownership() {
        let mut ledger = new_ledger();

        assert_fails(ledger.change_owner(&account(3), account(2)), AirdropError::NotOwner);
        assert_eq!(ledger.owner, owner());
    }

    #[test]
    fn test_change_owner_to_default_rejected() {
        let mut ledger = new_ledger();

        assert_fails(
            ledger.change_owner(&owner(), Pubkey::default()),
            AirdropError::InvalidOwner,
        );
        assert_eq!(ledger.owner, owner());
    }

    #[test]
    fn test_ownership_transfer_moves_privileges() {
        let mut ledger = new_ledger();
        let new_owner = account(2);
        ledger.register(account(3), LAMPORTS_PER_SOL).unwrap();
        ledger.change_owner(&owner(), new_owner).unwrap();

        // Previous owner lost every owner-only operation
        assert_fails(ledger.add_funds(&owner(), 1), AirdropError::NotOwner);
        assert_fails(ledger.start_distribution(&owner()), AirdropError::NotOwner);
        assert_fails(ledger.change_owner(&owner(), owner()), AirdropError::NotOwner);

        // New owner holds them immediately
        ledger.add_funds(&new_owner, 4).unwrap();
        assert_eq!(ledger.start_distribution(&new_owner).unwrap(), 4);
    }
}
