use crate::api::types::*;
use crate::config::{Config, Credentials, UpdatePolicy};
use crate::utils::error::{OrrError, OrrResult};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client for the ORR registry API.
///
/// Every call is issued once; nothing is retried.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &Config) -> OrrResult<Self> {
        if config.registry_url.is_empty() {
            return Err(OrrError::Config(
                "Registry URL cannot be empty".to_string(),
            ));
        }

        let mut builder =
            ClientBuilder::new().user_agent(format!("orr-admin/{}", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Ensure URL doesn't end with slash for consistent path construction
        let base_url = config.registry_url.trim_end_matches('/');

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange username and password for a bearer token
    pub async fn login(&self, username: &str, password: &str) -> OrrResult<LoginOutcome> {
        let url = format!("{}/user/auth", self.base_url);
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        debug!(%url, username, "POST");
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), "auth response");

        if status.as_u16() == 200 {
            let auth: AuthResponse = serde_json::from_str(&text)?;
            Ok(LoginOutcome::Token(auth.token))
        } else {
            Ok(LoginOutcome::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    /// Fetch every registry entry in one request
    pub async fn list_onts(&self, credentials: &Credentials) -> OrrResult<Vec<Ont>> {
        let url = format!("{}/ont", self.base_url);

        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header("Authorization", credentials.bearer())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Set visibility and status on one entry version
    pub async fn update_ont_version(
        &self,
        credentials: &Credentials,
        iri: &str,
        version: &str,
        policy: &UpdatePolicy,
    ) -> OrrResult<RawReply> {
        require_non_empty("IRI", iri)?;
        require_non_empty("version", version)?;

        let url = format!("{}/ont", self.base_url);
        let request = UpdateRequest {
            iri: iri.to_string(),
            version: version.to_string(),
            user_name: credentials.username.clone(),
            visibility: policy.visibility.clone(),
            status: policy.status.clone(),
        };

        debug!(%url, iri, version, "PUT");
        let response = self
            .client
            .put(&url)
            .header("Authorization", credentials.bearer())
            .json(&request)
            .send()
            .await?;

        Self::raw_reply(response).await
    }

    /// Delete one version, or the whole entry when `version` is `None`
    pub async fn delete_ont(
        &self,
        credentials: &Credentials,
        iri: &str,
        version: Option<&str>,
    ) -> OrrResult<RawReply> {
        require_non_empty("IRI", iri)?;
        if let Some(version) = version {
            require_non_empty("version", version)?;
        }

        let url = format!("{}/ont", self.base_url);
        let request = DeleteRequest {
            iri: iri.to_string(),
            version: version.map(str::to_string),
        };

        debug!(%url, iri, ?version, "DELETE");
        let response = self
            .client
            .delete(&url)
            .header("Authorization", credentials.bearer())
            .json(&request)
            .send()
            .await?;

        Self::raw_reply(response).await
    }

    async fn raw_reply(response: Response) -> OrrResult<RawReply> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "response");
        Ok(RawReply { status, body })
    }

    /// Handle API response, parsing JSON or error
    async fn handle_response<T>(&self, response: Response) -> OrrResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "response");

        if status.is_success() {
            serde_json::from_str(&text).map_err(OrrError::Json)
        } else {
            Err(OrrError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

fn require_non_empty(what: &str, value: &str) -> OrrResult<()> {
    if value.trim().is_empty() {
        return Err(OrrError::InvalidArgument(format!("{} cannot be empty", what)));
    }
    Ok(())
}
