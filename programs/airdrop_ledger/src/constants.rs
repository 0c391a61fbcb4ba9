use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/**
 * Program Constants
 *
 * PDA seeds and the limits that shape registration.
 */

/// ===== REGISTRATION CONSTANTS =====

/// Minimum lamport balance a caller must hold to register (1 SOL)
/// - Checked against the caller's own account at call time, not the pool
#[constant]
pub const MIN_REGISTRATION_BALANCE: u64 = LAMPORTS_PER_SOL;

/// Maximum number of registered addresses
/// - The ledger account is allocated once, so the registry has a fixed capacity
pub const MAX_PARTICIPANTS: usize = 200;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the ledger PDA derivation
/// - Used in: ["ledger"]
/// - One ledger per program deployment
#[constant]
pub const LEDGER_SEED: &str = "ledger";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", ledger_key, claimant_key]
/// - One claim record per claimant, prevents double-claiming
#[constant]
pub const CLAIM_SEED: &str = "claim";
