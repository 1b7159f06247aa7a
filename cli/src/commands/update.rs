use crate::api::ApiClient;
use crate::config::{Config, Credentials, UpdatePolicy};
use crate::utils::error::OrrResult;
use crate::utils::format;

/// Execute the update command against one entry version
pub async fn execute(
    config: &Config,
    credentials: &Credentials,
    iri: &str,
    version: &str,
    policy: &UpdatePolicy,
) -> OrrResult<()> {
    println!("updating iri={}, version={}", iri, version);

    let client = ApiClient::new(config)?;
    let reply = client
        .update_ont_version(credentials, iri, version, policy)
        .await?;

    println!("{}", format::reply_text(&reply));
    Ok(())
}
