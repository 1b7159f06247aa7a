//! Plain-text rendering of registry data for stdout.

use crate::api::types::{Ont, RawReply};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Decode a `YYYYMMDDTHHMMSS` version token
pub fn version_timestamp(version: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(version, "%Y%m%dT%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Key fields of an entry, one per line, followed by a blank line.
/// Timestamp-shaped versions get an extra decoded line after the raw token.
pub fn ont_block(ont: &Ont) -> String {
    let mut block = format!(
        "     name    : {}\n     iri     : {}\n     version : {}\n",
        ont.name, ont.uri, ont.version,
    );
    if let Some(ts) = version_timestamp(&ont.version) {
        block.push_str(&format!(
            "    released : {}\n",
            ts.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    block.push_str(&format!(
        "   ownerName : {}\n  visibility : {}\n      status : {}\n",
        ont.owner_name_or_unknown(),
        ont.visibility_or_unknown(),
        ont.status_or_unknown(),
    ));
    block
}

pub fn total_line(total: usize) -> String {
    format!("   total: {} ontologies", total)
}

pub fn selected_line(selected: usize) -> String {
    format!("selected: {} ontologies:", selected)
}

/// Response body for display: compact JSON when it parses, otherwise as-is.
/// Non-success statuses are prefixed with the code.
pub fn reply_text(reply: &RawReply) -> String {
    let body = match serde_json::from_str::<serde_json::Value>(&reply.body) {
        Ok(value) => value.to_string(),
        Err(_) => reply.body.clone(),
    };

    if reply.is_success() {
        body
    } else {
        format!("{}: {}", reply.status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ont {
        Ont {
            name: "mytestont".to_string(),
            uri: "https://mmisw.org/ont/mmitest/testtest".to_string(),
            version: "20210501T202157".to_string(),
            owner_name: Some("mmitest".to_string()),
            visibility: Some("public".to_string()),
            status: None,
        }
    }

    #[test]
    fn test_version_timestamp() {
        let ts = version_timestamp("20210501T202157").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2021-05-01 20:21:57");
        assert!(version_timestamp("1.0.0").is_none());
    }

    #[test]
    fn test_ont_block_layout() {
        let block = ont_block(&sample());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "     name    : mytestont");
        assert_eq!(lines[1], "     iri     : https://mmisw.org/ont/mmitest/testtest");
        assert_eq!(lines[2], "     version : 20210501T202157");
        assert_eq!(lines[3], "    released : 2021-05-01 20:21:57 UTC");
        assert_eq!(lines[4], "   ownerName : mmitest");
        assert_eq!(lines[5], "  visibility : public");
        assert_eq!(lines[6], "      status : ?");
    }

    #[test]
    fn test_ont_block_keeps_opaque_version() {
        let mut ont = sample();
        ont.version = "v2".to_string();
        let block = ont_block(&ont);
        assert!(block.contains("     version : v2\n"));
        assert!(!block.contains("released"));
        assert_eq!(block.lines().count(), 6);
    }

    #[test]
    fn test_summary_lines() {
        assert_eq!(total_line(12), "   total: 12 ontologies");
        assert_eq!(selected_line(3), "selected: 3 ontologies:");
    }

    #[test]
    fn test_reply_text() {
        let ok = RawReply {
            status: 200,
            body: "{ \"uri\" : \"X\" }".to_string(),
        };
        assert_eq!(reply_text(&ok), r#"{"uri":"X"}"#);

        let failed = RawReply {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(reply_text(&failed), "403: forbidden");
    }
}
