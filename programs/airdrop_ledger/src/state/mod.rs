pub mod ledger_state;
pub mod claim_state;

pub use ledger_state::*;
pub use claim_state::*;
