//! Resident project tracking. Projects live in the remote `projects`
//! collection, with the built-in starter set served when no remote data
//! exists yet.

use crate::curriculum;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{remote_ref, required_str};
use crate::ipc::types::{AppState, Request};
use crate::remote::RemoteStore;
use serde_json::{json, Map, Value};
use uuid::Uuid;

const PROJECTS_COLLECTION: &str = "projects";

fn fetch_projects(remote: Option<&dyn RemoteStore>) -> Option<Vec<Value>> {
    let remote = remote?;
    match remote.fetch_all(PROJECTS_COLLECTION) {
        Ok(docs) if !docs.is_empty() => Some(docs),
        Ok(_) => None,
        Err(e) => {
            log::warn!("project fetch failed, using defaults: {e:#}");
            None
        }
    }
}

fn push_project(remote: Option<&dyn RemoteStore>, id: &str, doc: &Value) -> bool {
    match remote {
        Some(remote) => match remote.set_document(PROJECTS_COLLECTION, id, doc) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("project sync failed: {e:#}");
                false
            }
        },
        None => false,
    }
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let projects = fetch_projects(remote_ref(&state.remote))
        .unwrap_or_else(curriculum::default_projects);
    ok(&req.id, json!({ "projects": projects }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let title = match required_str(req, "title") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let due_date = match required_str(req, "dueDate") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let mut doc = Map::new();
    if let Some(params) = req.params.as_object() {
        doc.extend(params.clone());
    }
    let id = Uuid::new_v4().to_string();
    doc.insert("id".to_string(), json!(id));
    doc.insert("title".to_string(), json!(title));
    doc.insert("dueDate".to_string(), json!(due_date));
    let doc = Value::Object(doc);

    let synced = push_project(remote_ref(&state.remote), &id, &doc);
    ok(&req.id, json!({ "project": doc, "synced": synced }))
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
    let synced = push_project(remote_ref(&state.remote), &id, &doc);
    ok(&req.id, json!({ "id": id, "synced": synced }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let synced = match remote_ref(&state.remote) {
        Some(remote) => match remote.delete_document(PROJECTS_COLLECTION, &id) {
            Ok(()) => true,
            Err(e) if crate::remote::is_not_found(&e) => {
                return err(&req.id, "not_found", format!("no project {}", id), None);
            }
            Err(e) => {
                log::warn!("project delete failed: {e:#}");
                false
            }
        },
        None => false,
    };
    ok(&req.id, json!({ "deleted": id, "synced": synced }))
}

fn handle_clear_all(state: &mut AppState, req: &Request) -> serde_json::Value {
    let synced = match remote_ref(&state.remote) {
        Some(remote) => match remote.replace_all(PROJECTS_COLLECTION, &[]) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("project clear failed: {e:#}");
                false
            }
        },
        None => false,
    };
    ok(&req.id, json!({ "cleared": true, "synced": synced }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "projects.list" => Some(handle_list(state, req)),
        "projects.add" => Some(handle_add(state, req)),
        "projects.update" => Some(handle_update(state, req)),
        "projects.delete" => Some(handle_delete(state, req)),
        "projects.clearAll" => Some(handle_clear_all(state, req)),
        _ => None,
    }
}
