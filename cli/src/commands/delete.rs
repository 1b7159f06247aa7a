use crate::api::ApiClient;
use crate::config::{Config, Credentials};
use crate::utils::error::OrrResult;
use crate::utils::format;

/// Execute the delete command. Without a version the whole entry is removed.
pub async fn execute(
    config: &Config,
    credentials: &Credentials,
    iri: &str,
    version: Option<&str>,
) -> OrrResult<()> {
    println!("deleting iri={}, version={}", iri, version.unwrap_or("None"));

    let client = ApiClient::new(config)?;
    let reply = client.delete_ont(credentials, iri, version).await?;

    println!("{}", format::reply_text(&reply));
    Ok(())
}
