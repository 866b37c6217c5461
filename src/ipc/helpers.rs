//! Shared param parsing and state accessors for the handler families.
//!
//! Accessors take the individual `AppState` fields rather than the whole
//! struct so a handler can hold the cache borrow while mutating the schedule.

use rusqlite::Connection;
use serde_json::Value as JsonValue;

use crate::ipc::error::err;
use crate::ipc::types::Request;
use crate::remote::RemoteStore;

pub fn cache_conn<'a>(
    cache: &'a Option<Connection>,
    req: &Request,
) -> Result<&'a Connection, serde_json::Value> {
    cache
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}

pub fn remote_ref(remote: &Option<Box<dyn RemoteStore>>) -> Option<&dyn RemoteStore> {
    remote.as_deref()
}

pub fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

pub fn required_u32(req: &Request, key: &str) -> Result<u32, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

pub fn opt_str(req: &Request, key: &str) -> Option<String> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accepts an id that is a string or a bare integer; returns its string form.
pub fn id_param(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    match req.params.get(key) {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        _ => Err(err(&req.id, "bad_params", format!("missing {}", key), None)),
    }
}
