use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{error::Error, model::app::AppState};

/// Per-request unit of work backed by a single database transaction.
///
/// Extracted by handlers after authentication. All repository calls for the request run
/// against [`UnitOfWork::conn`], and the handler calls [`UnitOfWork::commit`] once at the
/// end. Returning early with an error drops the transaction, which rolls it back.
pub struct UnitOfWork(DatabaseTransaction);

impl UnitOfWork {
    /// Begins a new transaction on the provided connection
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, Error> {
        Ok(Self(db.begin().await?))
    }

    /// Connection to run queries within this unit of work
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Commits every change made within this unit of work
    pub async fn commit(self) -> Result<(), Error> {
        self.0.commit().await?;

        Ok(())
    }
}

impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = Error;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        Self::begin(&state.db).await
    }
}
