//! Image bank: binary uploads to the remote blob store with a metadata
//! document per image, plus a cache-side backup of the metadata so the list
//! survives remote outages. Uploads require a remote; there is no local blob
//! storage.

use crate::cache::{self, KEY_IMAGE_BANK};
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{cache_conn, remote_ref, required_str};
use crate::ipc::types::{AppState, Request};
use chrono::Local;
use serde_json::{json, Value};
use std::path::Path;
use uuid::Uuid;

const IMAGES_COLLECTION: &str = "imageBank";

/// Legacy documents carry `{ "seconds": ... }` upload timestamps; newer ones
/// a string. Reduce both to something sortable.
fn uploaded_at(doc: &Value) -> String {
    match doc.get("uploadedAt") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(map)) => map
            .get("seconds")
            .and_then(Value::as_i64)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let mut images = match remote_ref(&state.remote) {
        Some(remote) => match remote.fetch_all(IMAGES_COLLECTION) {
            Ok(docs) => docs,
            Err(e) => {
                log::warn!("image list fetch failed, using cache: {e:#}");
                cache::get_array(cache, KEY_IMAGE_BANK)
            }
        },
        None => cache::get_array(cache, KEY_IMAGE_BANK),
    };
    images.sort_by(|a, b| uploaded_at(b).cmp(&uploaded_at(a)));
    ok(&req.id, json!({ "images": images }))
}

fn handle_upload(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let Some(remote) = remote_ref(&state.remote) else {
        return err(&req.id, "remote_unavailable", "image upload needs a remote", None);
    };
    let path = match required_str(req, "path") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let file_path = Path::new(&path);
    let bytes = match std::fs::read(file_path) {
        Ok(b) => b,
        Err(e) => return err(&req.id, "io_error", format!("read {}: {}", path, e), None),
    };
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    let storage_name = format!("{}_{}", Local::now().timestamp_millis(), file_name);

    let blob = match remote.upload_blob(&storage_name, &bytes) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "remote_error", format!("upload failed: {e:#}"), None),
    };

    let mut doc = json!({
        "id": Uuid::new_v4().to_string(),
        "name": file_name,
        "storagePath": blob.get("storagePath").cloned().unwrap_or(json!(storage_name)),
        "downloadURL": blob.get("downloadURL").cloned().unwrap_or(Value::Null),
        "uploadedAt": Local::now().to_rfc3339(),
    });
    if let Some(metadata) = req.params.get("metadata").and_then(Value::as_object) {
        for (key, value) in metadata {
            if doc.get(key.as_str()).is_none() {
                doc[key.as_str()] = value.clone();
            }
        }
    }

    let id = doc["id"].as_str().unwrap_or_default().to_string();
    if let Err(e) = remote.set_document(IMAGES_COLLECTION, &id, &doc) {
        // The blob landed but nothing references it; remove it again.
        if let Some(path) = doc["storagePath"].as_str() {
            if let Err(cleanup) = remote.delete_blob(path) {
                log::warn!("orphaned blob cleanup failed for {}: {cleanup:#}", path);
            }
        }
        return err(
            &req.id,
            "remote_error",
            format!("metadata write failed: {e:#}"),
            None,
        );
    }

    // Cache backup so the list keeps working if the remote goes away later.
    let mut backup = cache::get_array(cache, KEY_IMAGE_BANK);
    backup.push(doc.clone());
    if let Err(e) = cache::set_json(cache, KEY_IMAGE_BANK, &Value::Array(backup)) {
        log::warn!("image bank cache write failed: {e:#}");
    }

    ok(&req.id, json!({ "image": doc }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let Some(remote) = remote_ref(&state.remote) else {
        return err(&req.id, "remote_unavailable", "image delete needs a remote", None);
    };
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    // The metadata document names the blob to remove.
    let storage_path = remote
        .fetch_all(IMAGES_COLLECTION)
        .ok()
        .and_then(|docs| {
            docs.into_iter()
                .find(|d| d.get("id").and_then(Value::as_str) == Some(id.as_str()))
        })
        .and_then(|d| {
            d.get("storagePath")
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    if let Err(e) = remote.delete_document(IMAGES_COLLECTION, &id) {
        if crate::remote::is_not_found(&e) {
            return err(&req.id, "not_found", format!("no image {}", id), None);
        }
        return err(&req.id, "remote_error", format!("delete failed: {e:#}"), None);
    }
    if let Some(storage_path) = storage_path {
        if let Err(e) = remote.delete_blob(&storage_path) {
            log::warn!("blob delete failed for {}: {e:#}", storage_path);
        }
    }

    let mut backup = cache::get_array(cache, KEY_IMAGE_BANK);
    backup.retain(|d| d.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if let Err(e) = cache::set_json(cache, KEY_IMAGE_BANK, &Value::Array(backup)) {
        log::warn!("image bank cache write failed: {e:#}");
    }

    ok(&req.id, json!({ "deleted": id }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "images.list" => Some(handle_list(state, req)),
        "images.upload" => Some(handle_upload(state, req)),
        "images.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
