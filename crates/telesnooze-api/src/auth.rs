use std::sync::Arc;

use axum::{extract::State, response::IntoResponse};
use tracing::{debug, error};

use telesnooze_crypto::PasswordScheme;
use telesnooze_db::Database;
use telesnooze_types::api::LoginRequest;
use telesnooze_types::models::Account;

use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};
use crate::extract::Payload;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub password_scheme: PasswordScheme,
}

/// Run store work on the blocking pool so SQLite never stalls the runtime.
pub(crate) async fn blocking<F, T>(state: &AppState, f: F) -> ApiResult<T>
where
    F: FnOnce(&AppStateInner) -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Persistence(anyhow::anyhow!("blocking task failed: {}", e))
        })?
}

/// GET /api/v1/ — liveness marker.
pub async fn hello() -> impl IntoResponse {
    debug!("hello new user");
    [("hello", "there")]
}

/// POST /api/v1/createUser
pub async fn create_user(
    State(state): State<AppState>,
    Payload(account): Payload<Account>,
) -> ApiResult<&'static str> {
    blocking(&state, move |s| {
        CredentialStore::new(&s.db, s.password_scheme).register(&account)
    })
    .await?;

    Ok("Success")
}

/// POST /api/v1/login
///
/// Storage failures are logged and reported as a failed match, so the
/// response never hints at why a login did not succeed.
pub async fn login(
    State(state): State<AppState>,
    Payload(req): Payload<LoginRequest>,
) -> ApiResult<&'static str> {
    let outcome = blocking(&state, move |s| {
        CredentialStore::new(&s.db, s.password_scheme).authenticate(&req.username, &req.password)
    })
    .await;

    match outcome {
        Ok(user_id) => {
            debug!("Login succeeded for {}", user_id);
            Ok("Successful find")
        }
        Err(ApiError::Persistence(e)) => {
            error!("Login lookup failed: {:#}", e);
            Err(ApiError::Auth)
        }
        Err(e) => Err(e),
    }
}
