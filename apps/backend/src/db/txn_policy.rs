use std::sync::OnceLock;

/// What `with_txn` does with a transaction whose closure returned `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit on success (default behavior)
    CommitOnOk,
    /// Roll back on success so test runs leave the store untouched
    RollbackOnOk,
}

impl TxnPolicy {
    pub fn commits(self) -> bool {
        self == Self::CommitOnOk
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Process-wide policy; `CommitOnOk` until a harness installs another.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// First call wins; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    if POLICY.set(policy).is_err() {
        tracing::debug!(?policy, "transaction policy already set; ignoring");
    }
}
