//! Secret-key login against the warehouse API.

use thiserror::Error;

use stockroom_client::{ApiClient, ApiError};
use stockroom_domain::Warehouseman;

use crate::session::SessionStore;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Secret key matched zero or more than one warehouseman record.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("session storage error: {0}")]
    Storage(String),
}

/// Authenticate with a secret key and persist the session.
///
/// Succeeds only when exactly one warehouseman record matches the key; zero
/// matches and ambiguous matches both read as bad credentials.
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    secret_key: &str,
) -> Result<Warehouseman, AuthError> {
    if secret_key.trim().is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    let mut matches = client.find_warehousemen_by_secret(secret_key).await?;
    if matches.len() != 1 {
        tracing::info!(matches = matches.len(), "login rejected");
        return Err(AuthError::InvalidCredentials);
    }

    let user = matches.remove(0);
    store.save(&user)?;
    tracing::info!(warehouseman_id = %user.id, "login succeeded");
    Ok(user)
}

/// Drop the persisted session.
pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
    store.clear()?;
    tracing::info!("logged out");
    Ok(())
}
