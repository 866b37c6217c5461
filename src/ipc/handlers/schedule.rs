//! Schedule entry operations. Every mutation commits through the store's
//! single persistence path and reports whether the remote push landed.

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{cache_conn, id_param, opt_str, remote_ref, required_str};
use crate::ipc::types::{AppState, Request};
use serde_json::{json, Value};

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "items": state.schedule.to_json() }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let topic = match required_str(req, "topic") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let date = match required_str(req, "date") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let subtopic = opt_str(req, "subtopic");

    let Some(item) = state.schedule.add(&topic, subtopic.as_deref(), &date) else {
        return err(&req.id, "not_found", format!("unknown topic: {}", topic), None);
    };
    let item = serde_json::to_value(item).unwrap_or(Value::Null);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "item": item, "synced": synced }))
}

fn handle_toggle_completed(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let id = match id_param(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    state.schedule.toggle_completed(&id);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "items": state.schedule.to_json(), "synced": synced }))
}

fn handle_update_date(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let id = match id_param(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let date = match required_str(req, "date") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    state.schedule.update_date(&id, &date);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "items": state.schedule.to_json(), "synced": synced }))
}

fn handle_remove(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let id = match id_param(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    state.schedule.remove(&id);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "items": state.schedule.to_json(), "synced": synced }))
}

fn handle_toggle_subtopic(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let id = match id_param(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let subtopic = match required_str(req, "subtopic") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    state.schedule.toggle_subtopic(&id, &subtopic);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "items": state.schedule.to_json(), "synced": synced }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.list" => Some(handle_list(state, req)),
        "schedule.add" => Some(handle_add(state, req)),
        "schedule.toggleCompleted" => Some(handle_toggle_completed(state, req)),
        "schedule.updateDate" => Some(handle_update_date(state, req)),
        "schedule.remove" => Some(handle_remove(state, req)),
        "schedule.toggleSubtopic" => Some(handle_toggle_subtopic(state, req)),
        _ => None,
    }
}
