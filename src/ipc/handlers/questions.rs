//! Board question bank: built-in defaults plus user-authored questions.
//!
//! Custom questions live in the cache and mirror to the remote
//! `customQuestions` collection. Defaults are never mutated; deleting one
//! records its integer id in a suppression list instead.

use crate::cache::{self, KEY_CUSTOM_QUESTIONS, KEY_DELETED_DEFAULT_QUESTION_IDS};
use crate::curriculum;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{cache_conn, remote_ref, required_str};
use crate::ipc::types::{AppState, Request};
use crate::remote::RemoteStore;
use rusqlite::Connection;
use serde_json::{json, Value};
use uuid::Uuid;

const QUESTIONS_COLLECTION: &str = "customQuestions";

fn load_custom(cache: &Connection, remote: Option<&dyn RemoteStore>) -> Vec<Value> {
    if let Some(remote) = remote {
        match remote.fetch_all(QUESTIONS_COLLECTION) {
            Ok(docs) if !docs.is_empty() => return docs,
            Ok(_) => {}
            Err(e) => log::warn!("custom question fetch failed, using cache: {e:#}"),
        }
    }
    cache::get_array(cache, KEY_CUSTOM_QUESTIONS)
}

fn save_custom(
    cache: &Connection,
    remote: Option<&dyn RemoteStore>,
    questions: &[Value],
) -> bool {
    if let Err(e) = cache::set_json(cache, KEY_CUSTOM_QUESTIONS, &Value::Array(questions.to_vec()))
    {
        log::warn!("custom question cache write failed: {e:#}");
    }
    match remote {
        Some(remote) => match remote.replace_all(QUESTIONS_COLLECTION, questions) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("custom question sync failed, saved locally only: {e:#}");
                false
            }
        },
        None => false,
    }
}

fn deleted_default_ids(cache: &Connection) -> Vec<i64> {
    cache::get_array(cache, KEY_DELETED_DEFAULT_QUESTION_IDS)
        .iter()
        .filter_map(Value::as_i64)
        .collect()
}

fn visible_questions(cache: &Connection, remote: Option<&dyn RemoteStore>) -> Vec<Value> {
    let suppressed = deleted_default_ids(cache);
    let mut out: Vec<Value> = curriculum::default_questions()
        .into_iter()
        .filter(|q| {
            q.get("id")
                .and_then(Value::as_i64)
                .map(|id| !suppressed.contains(&id))
                .unwrap_or(true)
        })
        .collect();
    out.extend(load_custom(cache, remote));
    out
}

/// A well-formed question: non-empty text, exactly four non-empty options,
/// and a correct-answer index into them.
fn validate_question(q: &Value) -> Result<(), String> {
    let text = q.get("question").and_then(Value::as_str).unwrap_or("");
    if text.trim().is_empty() {
        return Err("question text is required".to_string());
    }
    let options = q
        .get("options")
        .and_then(Value::as_array)
        .ok_or("options must be an array")?;
    if options.len() != 4 {
        return Err("exactly four options are required".to_string());
    }
    if options
        .iter()
        .any(|o| o.as_str().map(|s| s.trim().is_empty()).unwrap_or(true))
    {
        return Err("every option must be a non-empty string".to_string());
    }
    let answer = q
        .get("correctAnswer")
        .and_then(Value::as_u64)
        .ok_or("correctAnswer is required")?;
    if answer > 3 {
        return Err("correctAnswer must be 0..=3".to_string());
    }
    Ok(())
}

fn build_custom_question(params: &Value) -> Value {
    let mut q = json!({
        "id": Uuid::new_v4().to_string(),
        "question": params.get("question").cloned().unwrap_or(Value::Null),
        "options": params.get("options").cloned().unwrap_or(Value::Null),
        "correctAnswer": params.get("correctAnswer").cloned().unwrap_or(Value::Null),
        "isCustom": true,
    });
    for key in ["explanation", "topic", "subtopic", "level", "difficulty"] {
        if let Some(v) = params.get(key) {
            q[key] = v.clone();
        }
    }
    q
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let questions = visible_questions(cache, remote_ref(&state.remote));
    ok(&req.id, json!({ "questions": questions }))
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    if let Err(msg) = validate_question(&req.params) {
        return err(&req.id, "bad_params", msg, None);
    }
    let question = build_custom_question(&req.params);
    let mut custom = load_custom(cache, remote_ref(&state.remote));
    custom.push(question.clone());
    let synced = save_custom(cache, remote_ref(&state.remote), &custom);
    ok(&req.id, json!({ "question": question, "synced": synced }))
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(patch) = req.params.get("patch").and_then(Value::as_object) else {
        return err(&req.id, "bad_params", "missing patch", None);
    };

    let mut custom = load_custom(cache, remote_ref(&state.remote));
    let Some(target) = custom
        .iter_mut()
        .find(|q| q.get("id").and_then(Value::as_str) == Some(id.as_str()))
    else {
        // Default questions are read-only; only custom entries can change.
        return err(&req.id, "not_found", format!("no custom question {}", id), None);
    };
    for (key, value) in patch {
        if key != "id" && key != "isCustom" {
            target[key.as_str()] = value.clone();
        }
    }
    if let Err(msg) = validate_question(target) {
        return err(&req.id, "bad_params", msg, None);
    }
    let updated = target.clone();
    let synced = save_custom(cache, remote_ref(&state.remote), &custom);
    ok(&req.id, json!({ "question": updated, "synced": synced }))
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    // Integer ids are defaults: suppress rather than remove.
    if let Some(default_id) = req.params.get("id").and_then(Value::as_i64) {
        let mut suppressed = deleted_default_ids(cache);
        if !suppressed.contains(&default_id) {
            suppressed.push(default_id);
        }
        let payload = Value::Array(suppressed.iter().map(|id| json!(id)).collect());
        if let Err(e) = cache::set_json(cache, KEY_DELETED_DEFAULT_QUESTION_IDS, &payload) {
            log::warn!("suppression list write failed: {e:#}");
        }
        return ok(&req.id, json!({ "deleted": default_id, "synced": false }));
    }

    let id = match required_str(req, "id") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let mut custom = load_custom(cache, remote_ref(&state.remote));
    let before = custom.len();
    custom.retain(|q| q.get("id").and_then(Value::as_str) != Some(id.as_str()));
    if custom.len() == before {
        return err(&req.id, "not_found", format!("no custom question {}", id), None);
    }
    let synced = save_custom(cache, remote_ref(&state.remote), &custom);
    ok(&req.id, json!({ "deleted": id, "synced": synced }))
}

fn handle_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let query = match required_str(req, "query") {
        Ok(v) => v.to_lowercase(),
        Err(resp) => return resp,
    };
    let matches: Vec<Value> = visible_questions(cache, remote_ref(&state.remote))
        .into_iter()
        .filter(|q| {
            ["question", "subtopic", "explanation"].iter().any(|key| {
                q.get(*key)
                    .and_then(Value::as_str)
                    .map(|s| s.to_lowercase().contains(&query))
                    .unwrap_or(false)
            })
        })
        .collect();
    ok(&req.id, json!({ "questions": matches }))
}

fn handle_export(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let custom = load_custom(cache, remote_ref(&state.remote));
    let text = serde_json::to_string_pretty(&custom).unwrap_or_else(|_| "[]".to_string());
    ok(&req.id, json!({ "json": text, "count": custom.len() }))
}

fn handle_import(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let text = match required_str(req, "json") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let parsed: Vec<Value> = match serde_json::from_str(&text) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return err(&req.id, "bad_params", "expected a JSON array", None),
        Err(e) => return err(&req.id, "bad_params", format!("invalid JSON: {}", e), None),
    };

    // Entry-by-entry: malformed entries are skipped, the rest land. Not
    // atomic, matching the manual nature of an import.
    let mut custom = load_custom(cache, remote_ref(&state.remote));
    let mut imported = 0usize;
    let mut skipped = 0usize;
    for entry in parsed {
        if validate_question(&entry).is_err() {
            skipped += 1;
            continue;
        }
        let mut q = entry;
        q["id"] = json!(Uuid::new_v4().to_string());
        q["isCustom"] = json!(true);
        custom.push(q);
        imported += 1;
    }
    let synced = save_custom(cache, remote_ref(&state.remote), &custom);
    ok(
        &req.id,
        json!({ "imported": imported, "skipped": skipped, "synced": synced }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "questions.list" => Some(handle_list(state, req)),
        "questions.add" => Some(handle_add(state, req)),
        "questions.update" => Some(handle_update(state, req)),
        "questions.delete" => Some(handle_delete(state, req)),
        "questions.search" => Some(handle_search(state, req)),
        "questions.export" => Some(handle_export(state, req)),
        "questions.import" => Some(handle_import(state, req)),
        _ => None,
    }
}
