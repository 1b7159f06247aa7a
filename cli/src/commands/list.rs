use crate::api::ApiClient;
use crate::config::{Config, Credentials};
use crate::utils::error::OrrResult;
use crate::utils::format;
use colored::*;

/// Execute the list command to show every registry entry
pub async fn execute(config: &Config, credentials: &Credentials) -> OrrResult<()> {
    println!("retrieving list of ontologies");

    let client = ApiClient::new(config)?;
    let onts = client.list_onts(credentials).await?;

    println!("{}", format::total_line(onts.len()));
    if onts.is_empty() {
        println!("{}", "No ontologies found in the registry.".yellow());
        return Ok(());
    }

    for ont in &onts {
        println!("{}", format::ont_block(ont));
    }

    Ok(())
}
