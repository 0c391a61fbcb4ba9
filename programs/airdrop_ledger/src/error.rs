use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Owner-only function")]
    NotOwner,
    #[msg("New owner cannot be the default address")]
    InvalidOwner,

    // Registration errors
    #[msg("Insufficient balance to register")]
    InsufficientBalance,
    #[msg("Already registered")]
    AlreadyRegistered,
    #[msg("Airdrop already started")]
    DistributionAlreadyStarted,
    #[msg("Registration capacity reached")]
    RegistryFull,

    // Distribution state errors
    #[msg("No eligible addresses")]
    NoEligibleAddresses,
    #[msg("Airdrop not started")]
    DistributionNotStarted,

    // Claim errors
    #[msg("You are not eligible")]
    NotEligible,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Insufficient pool balance for this claim")]
    InsufficientPoolBalance,
    #[msg("Claim status account must be owned by this program")]
    InvalidClaimStatus,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
