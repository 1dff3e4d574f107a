use tracing::info;
use uuid::Uuid;

use telesnooze_crypto::PasswordScheme;
use telesnooze_crypto::password::verify as verify_password;
use telesnooze_db::Database;
use telesnooze_types::models::Account;
use telesnooze_types::validation;

use crate::error::{ApiError, ApiResult};

/// Account registration and the single credential check.
pub struct CredentialStore<'a> {
    db: &'a Database,
    scheme: PasswordScheme,
}

impl<'a> CredentialStore<'a> {
    pub fn new(db: &'a Database, scheme: PasswordScheme) -> Self {
        Self { db, scheme }
    }

    /// Validate, digest the password and store the account under a fresh id.
    /// Nothing is written when a rule fails.
    pub fn register(&self, account: &Account) -> ApiResult<Uuid> {
        validation::validate_account(account)?;

        let password_hash = self.scheme.hash(&account.password)?;
        let user_id = Uuid::new_v4();

        self.db.create_user(
            &user_id.to_string(),
            &account.email,
            &account.username,
            &password_hash,
            &account.phone,
        )?;

        info!("Registered account {} ({})", user_id, account.username);
        Ok(user_id)
    }

    /// Returns the id of the account whose username and password both match.
    /// A miss on either is the same `ApiError::Auth`.
    pub fn authenticate(&self, username: &str, password: &str) -> ApiResult<String> {
        self.db
            .get_users_by_username(username)?
            .into_iter()
            .find(|user| verify_password(password, &user.password))
            .map(|user| user.id)
            .ok_or(ApiError::Auth)
    }
}
