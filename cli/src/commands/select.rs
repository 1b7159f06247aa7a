use crate::api::{ApiClient, Ont};
use crate::config::{Credentials, SelectFilter};
use crate::utils::error::OrrResult;
use crate::utils::format;

impl SelectFilter {
    /// Whether `ont` passes the filter. Entries without a visibility never match.
    pub fn matches(&self, ont: &Ont) -> bool {
        ont.visibility.as_deref() == Some(self.visibility.as_str())
            && ont.name.contains(&self.name_contains)
    }
}

/// Result of filtering the full registry listing
#[derive(Debug, Clone)]
pub struct Selection {
    pub total: usize,
    pub selected: Vec<Ont>,
}

impl Selection {
    pub fn from_listing(onts: Vec<Ont>, filter: &SelectFilter) -> Self {
        let total = onts.len();
        let selected = onts.into_iter().filter(|ont| filter.matches(ont)).collect();
        Self { total, selected }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}\n{}",
            format::total_line(self.total),
            format::selected_line(self.selected.len())
        )
    }
}

/// List the registry and keep the entries matching `filter`, printing counts
pub async fn fetch_selected(
    client: &ApiClient,
    credentials: &Credentials,
    filter: &SelectFilter,
) -> OrrResult<Selection> {
    println!("retrieving list of ontologies");
    let onts = client.list_onts(credentials).await?;
    let selection = Selection::from_listing(onts, filter);
    println!("{}", selection.summary());
    Ok(selection)
}
