use sea_orm::DatabaseConnection;

/// Shared resources handed to every ledger call.
#[derive(Debug, Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The pooled connection; transactions are opened from here.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
