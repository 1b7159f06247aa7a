use crate::utils::error::{OrrError, OrrResult};

/// Environment variable holding the registry username
pub const USERNAME_ENV: &str = "ORR_USERNAME";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "ORR_TOKEN";

/// Read a required environment variable. Unset and empty are both missing.
pub fn env_var(name: &str) -> OrrResult<String> {
    env_var_with(name, |key| std::env::var(key).ok())
}

/// Same as [`env_var`] with a caller-supplied lookup.
pub fn env_var_with<F>(name: &str, lookup: F) -> OrrResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(OrrError::MissingEnv(name.to_string())),
    }
}

/// Identity used for authenticated registry calls
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Resolve from `ORR_USERNAME` and `ORR_TOKEN`
    pub fn from_env() -> OrrResult<Self> {
        let username = env_var(USERNAME_ENV)?;
        let token = env_var(TOKEN_ENV)?;
        Ok(Self { username, token })
    }

    /// Resolve through `lookup`, checking the username first
    pub fn from_lookup<F>(lookup: F) -> OrrResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = env_var_with(USERNAME_ENV, &lookup)?;
        let token = env_var_with(TOKEN_ENV, &lookup)?;
        Ok(Self { username, token })
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Keep the token out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"****")
            .finish()
    }
}
