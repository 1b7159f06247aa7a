use crate::api::{ApiClient, LoginOutcome};
use crate::utils::error::{OrrError, OrrResult};
use tracing::debug;

/// Authentication against the registry's credential exchange
pub struct AuthManager;

impl AuthManager {
    /// Use the given password, or prompt for one without echo
    pub fn resolve_password(password: Option<String>) -> OrrResult<String> {
        match password {
            Some(password) => Ok(password),
            None => {
                let password = rpassword::prompt_password("Password: ")?;
                if password.is_empty() {
                    return Err(OrrError::InvalidArgument(
                        "Password cannot be empty".to_string(),
                    ));
                }
                Ok(password)
            }
        }
    }

    /// Exchange credentials for a bearer token
    pub async fn login(
        client: &ApiClient,
        username: &str,
        password: Option<String>,
    ) -> OrrResult<LoginOutcome> {
        if username.trim().is_empty() {
            return Err(OrrError::InvalidArgument(
                "Username cannot be empty".to_string(),
            ));
        }

        let password = Self::resolve_password(password)?;
        debug!(username, "requesting token");
        client.login(username, &password).await
    }
}
