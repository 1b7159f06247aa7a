use crate::api::{ApiClient, LoginOutcome};
use crate::auth::AuthManager;
use crate::config::Config;
use crate::utils::error::OrrResult;

/// Line printed for a login outcome: the bare token, or `status: body`
pub fn outcome_text(outcome: &LoginOutcome) -> String {
    match outcome {
        LoginOutcome::Token(token) => token.clone(),
        LoginOutcome::Rejected { status, body } => format!("{}: {}", status, body),
    }
}

/// Execute the login command
pub async fn execute(config: &Config, username: String, password: Option<String>) -> OrrResult<()> {
    let client = ApiClient::new(config)?;
    let outcome = AuthManager::login(&client, &username, password).await?;
    println!("{}", outcome_text(&outcome));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_printed_bare() {
        let text = outcome_text(&LoginOutcome::Token("abc.def".to_string()));
        assert_eq!(text, "abc.def");
    }

    #[test]
    fn test_rejection_shows_status_and_body() {
        let text = outcome_text(&LoginOutcome::Rejected {
            status: 401,
            body: "invalid credentials".to_string(),
        });
        assert_eq!(text, "401: invalid credentials");
        assert!(!text.contains("abc.def"));
    }
}
