//! Transaction helpers: every mutating ledger operation is one unit of work.

pub mod txn;
pub mod txn_policy;

pub use txn::{with_txn, TxnFuture};
