pub mod lamports;

pub use lamports::*;
