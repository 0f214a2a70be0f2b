//! Timestamp and default stamping shared by every backend.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use super::document::{Fields, CREATED_AT_FIELD, ID_FIELD, PUBLISHED_FIELD, UPDATED_AT_FIELD};
use crate::utils::{format_timestamp, parse_timestamp};

/// Prepare the fields of a new document: drop any caller-supplied id and
/// timestamps, stamp `createdAt`/`updatedAt`, default `published` to false.
pub fn stamp_new(fields: &mut Fields) {
    fields.remove(ID_FIELD);
    let now = Value::String(format_timestamp(Utc::now()));
    fields.insert(CREATED_AT_FIELD.to_string(), now.clone());
    fields.insert(UPDATED_AT_FIELD.to_string(), now);

    let published_unset = fields.get(PUBLISHED_FIELD).map_or(true, Value::is_null);
    if published_unset {
        fields.insert(PUBLISHED_FIELD.to_string(), Value::Bool(false));
    }
}

/// Merge `patch` into `existing` and refresh `updatedAt`.
///
/// `id` and `createdAt` are never overwritten. The new `updatedAt` is always
/// strictly later than the previous one, even if the clock has not advanced.
pub fn stamp_merge(existing: &mut Fields, patch: Fields) {
    for (key, value) in patch {
        if key == ID_FIELD || key == CREATED_AT_FIELD || key == UPDATED_AT_FIELD {
            continue;
        }
        existing.insert(key, value);
    }

    let previous = existing
        .get(UPDATED_AT_FIELD)
        .and_then(Value::as_str)
        .and_then(parse_timestamp);
    let next = next_update_time(previous, Utc::now());
    existing.insert(
        UPDATED_AT_FIELD.to_string(),
        Value::String(format_timestamp(next)),
    );
}

fn next_update_time(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if now <= prev => prev
            .checked_add_signed(Duration::microseconds(1))
            .unwrap_or(prev),
        _ => now,
    }
}
