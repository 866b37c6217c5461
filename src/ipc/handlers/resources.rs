//! Study resource library, grouped as books / journals / links. Resources
//! live in the remote `resources` collection; with no remote (or an empty
//! one) the built-in starter set is served read-only.

use crate::curriculum;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{remote_ref, required_str};
use crate::ipc::types::{AppState, Request};
use crate::remote::RemoteStore;
use serde_json::{json, Map, Value};
use uuid::Uuid;

const RESOURCES_COLLECTION: &str = "resources";
const RESOURCE_TYPES: &[&str] = &["book", "journal", "link"];

fn fetch_resources(remote: Option<&dyn RemoteStore>) -> Option<Vec<Value>> {
    let remote = remote?;
    match remote.fetch_all(RESOURCES_COLLECTION) {
        Ok(docs) if !docs.is_empty() => Some(docs),
        Ok(_) => None,
        Err(e) => {
            log::warn!("resource fetch failed, using defaults: {e:#}");
            None
        }
    }
}

fn group_resources(flat: Vec<Value>) -> Value {
    let mut grouped = json!({ "books": [], "journals": [], "links": [] });
    for doc in flat {
        let bucket = match doc.get("type").and_then(Value::as_str) {
            Some("book") => "books",
            Some("journal") => "journals",
            Some("link") => "links",
            _ => continue,
        };
        if let Some(arr) = grouped[bucket].as_array_mut() {
            arr.push(doc);
        }
    }
    grouped
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let resources = match fetch_resources(remote_ref(&state.remote)) {
        Some(flat) => group_resources(flat),
        None => curriculum::default_resources(),
    };
    ok(&req.id, json!({ "resources": resources }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let title = match required_str(req, "title") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let rtype = match required_str(req, "type") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if !RESOURCE_TYPES.contains(&rtype.as_str()) {
        return err(&req.id, "bad_params", "type must be book, journal, or link", None);
    }

    let mut doc = Map::new();
    if let Some(params) = req.params.as_object() {
        doc.extend(params.clone());
    }
    let id = Uuid::new_v4().to_string();
    doc.insert("id".to_string(), json!(id));
    doc.insert("title".to_string(), json!(title));
    doc.insert("type".to_string(), json!(rtype));
    let doc = Value::Object(doc);

    let synced = push_resource(remote_ref(&state.remote), &id, &doc);
    ok(&req.id, json!({ "resource": doc, "synced": synced }))
}

fn push_resource(remote: Option<&dyn RemoteStore>, id: &str, doc: &Value) -> bool {
    match remote {
        Some(remote) => match remote.set_document(RESOURCES_COLLECTION, id, doc) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("resource sync failed: {e:#}");
                false
            }
        },
        None => false,
    }
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(patch) = req.params.get("patch").and_then(Value::as_object) else {
        return err(&req.id, "bad_params", "missing patch", None);
    };
    let mut doc = Map::new();
    for (key, value) in patch {
        if key != "id" {
            doc.insert(key.clone(), value.clone());
        }
    }
    let doc = Value::Object(doc);
    let synced = push_resource(remote_ref(&state.remote), &id, &doc);
    ok(&req.id, json!({ "id": id, "synced": synced }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let synced = match remote_ref(&state.remote) {
        Some(remote) => match remote.delete_document(RESOURCES_COLLECTION, &id) {
            Ok(()) => true,
            Err(e) if crate::remote::is_not_found(&e) => {
                return err(&req.id, "not_found", format!("no resource {}", id), None);
            }
            Err(e) => {
                log::warn!("resource delete failed: {e:#}");
                false
            }
        },
        None => false,
    };
    ok(&req.id, json!({ "deleted": id, "synced": synced }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "resources.list" => Some(handle_list(state, req)),
        "resources.add" => Some(handle_add(state, req)),
        "resources.update" => Some(handle_update(state, req)),
        "resources.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
