use crate::api::{ApiClient, Ont};
use crate::config::{Credentials, UpdatePolicy};
use crate::utils::error::OrrResult;
use crate::utils::format;
use clap::ValueEnum;
use tracing::info;

/// What `process-selected` does with each selected entry.
///
/// Implementations get the shared client and credentials. A registry error
/// status should be reported and swallowed so the loop moves on; returning
/// `Err` stops processing.
#[allow(async_fn_in_trait)]
pub trait OntAction {
    async fn apply(&self, client: &ApiClient, credentials: &Credentials, ont: &Ont)
        -> OrrResult<()>;
}

/// Prints a marker and leaves the entry alone
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAction;

impl OntAction for NoopAction {
    async fn apply(&self, _client: &ApiClient, _credentials: &Credentials, ont: &Ont) -> OrrResult<()> {
        println!("TODO process: ont.iri={}", ont.uri);
        Ok(())
    }
}

/// Built-in per-entry actions selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActionKind {
    /// Print the entry IRI only
    #[default]
    Noop,
    /// Apply the update policy to the entry's version
    UpdateVersion,
    /// Delete the entry's listed version
    DeleteVersion,
    /// Delete the entry with all its versions
    DeleteEntry,
}

/// A built-in action bound to its parameters
#[derive(Debug, Clone)]
pub enum BuiltinAction {
    Noop,
    UpdateVersion(UpdatePolicy),
    DeleteVersion,
    DeleteEntry,
}

impl BuiltinAction {
    pub fn new(kind: ActionKind, policy: UpdatePolicy) -> Self {
        match kind {
            ActionKind::Noop => BuiltinAction::Noop,
            ActionKind::UpdateVersion => BuiltinAction::UpdateVersion(policy),
            ActionKind::DeleteVersion => BuiltinAction::DeleteVersion,
            ActionKind::DeleteEntry => BuiltinAction::DeleteEntry,
        }
    }
}

impl OntAction for BuiltinAction {
    async fn apply(&self, client: &ApiClient, credentials: &Credentials, ont: &Ont) -> OrrResult<()> {
        match self {
            BuiltinAction::Noop => NoopAction.apply(client, credentials, ont).await,
            BuiltinAction::UpdateVersion(policy) => {
                info!(iri = %ont.uri, version = %ont.version, "updating");
                println!("updating iri={}, version={}", ont.uri, ont.version);
                let reply = client
                    .update_ont_version(credentials, &ont.uri, &ont.version, policy)
                    .await?;
                println!("{}", format::reply_text(&reply));
                Ok(())
            }
            BuiltinAction::DeleteVersion => {
                info!(iri = %ont.uri, version = %ont.version, "deleting version");
                println!("deleting iri={}, version={}", ont.uri, ont.version);
                let reply = client
                    .delete_ont(credentials, &ont.uri, Some(&ont.version))
                    .await?;
                println!("{}", format::reply_text(&reply));
                Ok(())
            }
            BuiltinAction::DeleteEntry => {
                info!(iri = %ont.uri, "deleting entry");
                println!("deleting iri={}, version=None", ont.uri);
                let reply = client.delete_ont(credentials, &ont.uri, None).await?;
                println!("{}", format::reply_text(&reply));
                Ok(())
            }
        }
    }
}

/// Apply `action` to each entry in order. Returns how many were processed.
pub async fn apply_all<A: OntAction>(
    action: &A,
    client: &ApiClient,
    credentials: &Credentials,
    onts: &[Ont],
) -> OrrResult<usize> {
    for ont in onts {
        action.apply(client, credentials, ont).await?;
    }
    Ok(onts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::cell::RefCell;

    fn ont(name: &str, version: &str) -> Ont {
        Ont {
            name: name.to_string(),
            uri: format!("https://example.org/ont/{}", name),
            version: version.to_string(),
            owner_name: None,
            visibility: Some("public".to_string()),
            status: None,
        }
    }

    struct Recording {
        seen: RefCell<Vec<String>>,
    }

    impl OntAction for Recording {
        async fn apply(&self, _: &ApiClient, _: &Credentials, ont: &Ont) -> OrrResult<()> {
            self.seen.borrow_mut().push(ont.uri.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_custom_action_sees_entries_in_order() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let creds = Credentials::new("alice", "tok123");
        let onts = vec![ont("a", "1"), ont("b", "2"), ont("c", "3")];
        let action = Recording {
            seen: RefCell::new(Vec::new()),
        };

        let count = apply_all(&action, &client, &creds, &onts).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            *action.seen.borrow(),
            vec![
                "https://example.org/ont/a",
                "https://example.org/ont/b",
                "https://example.org/ont/c"
            ]
        );
    }

    #[tokio::test]
    async fn test_noop_makes_no_requests() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let config = Config {
            registry_url: server.url(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let creds = Credentials::new("alice", "tok123");

        let action = BuiltinAction::new(ActionKind::Noop, UpdatePolicy::default());
        apply_all(&action, &client, &creds, &[ont("a", "1")])
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_version_continues_after_api_error() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("DELETE", "/ont")
            .match_body(Matcher::Json(json!({"iri": "https://example.org/ont/a", "version": "1"})))
            .with_status(404)
            .with_body(r#"{"error": "not found"}"#)
            .create_async()
            .await;
        let second = server
            .mock("DELETE", "/ont")
            .match_body(Matcher::Json(json!({"iri": "https://example.org/ont/b", "version": "2"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let config = Config {
            registry_url: server.url(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let creds = Credentials::new("alice", "tok123");

        let action = BuiltinAction::new(ActionKind::DeleteVersion, UpdatePolicy::default());
        let count = apply_all(&action, &client, &creds, &[ont("a", "1"), ont("b", "2")])
            .await
            .unwrap();

        assert_eq!(count, 2);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_entry_omits_version() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("DELETE", "/ont")
            .match_header("authorization", "Bearer tok123")
            .match_body(Matcher::Json(json!({"iri": "https://example.org/ont/a"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let config = Config {
            registry_url: server.url(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let creds = Credentials::new("alice", "tok123");

        let action = BuiltinAction::new(ActionKind::DeleteEntry, UpdatePolicy::default());
        apply_all(&action, &client, &creds, &[ont("a", "1")])
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_version_uses_policy() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("PUT", "/ont")
            .match_body(Matcher::Json(json!({
                "iri": "https://example.org/ont/a",
                "version": "1",
                "userName": "alice",
                "visibility": "public",
                "status": "published"
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let config = Config {
            registry_url: server.url(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let creds = Credentials::new("alice", "tok123");
        let policy = UpdatePolicy {
            visibility: "public".to_string(),
            status: "published".to_string(),
        };

        let action = BuiltinAction::new(ActionKind::UpdateVersion, policy);
        apply_all(&action, &client, &creds, &[ont("a", "1")])
            .await
            .unwrap();

        m.assert_async().await;
    }
}
