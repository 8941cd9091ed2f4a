//! spendly-domain
//!
//! Pure domain models (Ledger, Expense, Category, Budget) and the value objects
//! produced by the aggregation engine. No I/O, no CLI, no storage.

pub mod budget;
pub mod category;
pub mod common;
pub mod currency;
pub mod expense;
pub mod ledger;
pub mod period;
pub mod summary;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use currency::*;
pub use expense::*;
pub use ledger::*;
pub use period::*;
pub use summary::*;
