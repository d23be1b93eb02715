use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::txn_policy;
use crate::errors::domain::DomainError;
use crate::state::app_state::AppState;

/// Boxed future borrowing the transaction; the shape closures passed to `with_txn` return.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'a>>;

/// Execute a function as one unit of work.
///
/// Begins a transaction, runs the closure, then applies the process policy on
/// `Ok` (commit by default) or rolls back on `Err`. The rollback on error is
/// best-effort and the original error is preserved.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, DomainError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let txn = state.db().begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            if txn_policy::current().commits() {
                txn.commit().await?;
            } else {
                txn.rollback().await?;
            }
            Ok(val)
        }
        Err(err) => {
            debug!(error = %err, "rolling back transaction");
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
