pub mod initialize_ledger;
pub mod register;
pub mod add_funds;
pub mod start_distribution;
pub mod claim;
pub mod change_owner;
pub mod view;

pub use initialize_ledger::*;
pub use register::*;
pub use add_funds::*;
pub use start_distribution::*;
pub use claim::*;
pub use change_owner::*;
pub use view::*;
