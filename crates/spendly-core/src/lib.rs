//! spendly-core
//!
//! Expense aggregation engine and ledger services.
//! Depends on spendly-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod budget_service;
pub mod category_service;
pub mod dashboard_service;
pub mod error;
pub mod expense_service;
pub mod filter;
pub mod format;
pub mod ledger_service;
pub mod parse;
pub mod search;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod wallet_service;

pub use budget_service::*;
pub use category_service::*;
pub use dashboard_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use filter::*;
pub use format::*;
pub use ledger_service::*;
pub use parse::*;
pub use search::*;
pub use summary_service::*;
pub use time::*;
pub use wallet_service::*;
