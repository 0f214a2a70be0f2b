use serde_json::Value;

use super::proto;
use crate::collections::{Collection, SortField};
use crate::repository::{ContentError, ContentFlag, SortSpec};
use crate::store::Direction;

/// Convert an empty string to `None`, non-empty to `Some`.
pub fn nonempty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn resolve_collection(name: &str) -> Result<Collection, ContentError> {
    name.parse()
        .map_err(|_| ContentError::UnknownCollection(name.to_string()))
}

/// Parse the JSON payload carried in a request string.
pub fn parse_payload(json: &str) -> Result<Value, ContentError> {
    serde_json::from_str(json)
        .map_err(|e| ContentError::validation(format!("payload is not valid JSON: {e}")))
}

pub fn sort_specs_from_proto(specs: &[proto::SortSpec]) -> Result<Vec<SortSpec>, ContentError> {
    specs
        .iter()
        .map(|spec| {
            let field: SortField = spec
                .field
                .parse()
                .map_err(ContentError::Validation)?;
            let direction = match spec.direction() {
                proto::SortDirection::Asc => Direction::Asc,
                proto::SortDirection::Desc => Direction::Desc,
            };
            Ok(SortSpec { field, direction })
        })
        .collect()
}

pub fn flag_from_proto(flag: proto::ContentFlag) -> ContentFlag {
    match flag {
        proto::ContentFlag::Published => ContentFlag::Published,
        proto::ContentFlag::Featured => ContentFlag::Featured,
    }
}
