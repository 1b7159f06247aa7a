use crate::api::ApiClient;
use crate::commands::action::{apply_all, OntAction};
use crate::commands::select::fetch_selected;
use crate::config::{Config, Credentials, SelectFilter};
use crate::utils::error::OrrResult;
use crate::utils::format;
use tracing::info;

/// Execute the show-selected command
pub async fn show(config: &Config, credentials: &Credentials, filter: &SelectFilter) -> OrrResult<()> {
    let client = ApiClient::new(config)?;
    let selection = fetch_selected(&client, credentials, filter).await?;

    for ont in &selection.selected {
        println!("{}", format::ont_block(ont));
    }

    Ok(())
}

/// Execute the process-selected command with the given per-entry action
pub async fn process<A: OntAction>(
    config: &Config,
    credentials: &Credentials,
    filter: &SelectFilter,
    action: &A,
) -> OrrResult<()> {
    let client = ApiClient::new(config)?;
    let selection = fetch_selected(&client, credentials, filter).await?;

    let processed = apply_all(action, &client, credentials, &selection.selected).await?;
    info!(processed, "done");

    Ok(())
}
