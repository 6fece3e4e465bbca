use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    service::auth::token::TokenService,
    util::password::verify_password,
};

/// Exchanges user credentials for a bearer token
pub struct LoginService<'a, C: ConnectionTrait> {
    db: &'a C,
    tokens: &'a TokenService,
}

impl<'a, C: ConnectionTrait> LoginService<'a, C> {
    pub fn new(db: &'a C, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies the credentials and issues a token for the matching user.
    ///
    /// An unknown email and a wrong password fail identically so callers cannot probe
    /// which emails are registered.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed bearer token
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::PasswordHashError)` - Stored hash for the user could not be parsed
    /// - `Err(Error::DbErr)` - Database lookup failed
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("Issuing token for user ID {}", user.id);

        self.tokens.issue(user.id)
    }
}
