use crate::cache;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::opt_str;
use crate::ipc::types::{AppState, Request};
use crate::remote::{HttpRemoteStore, RemoteStore};
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string()),
            "remoteConfigured": state.remote.is_some(),
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    let conn = match cache::open_cache(&path) {
        Ok(conn) => conn,
        Err(e) => return err(&req.id, "cache_open_failed", format!("{e:?}"), None),
    };

    // Remote config comes from the request, falling back to the environment.
    // Without either the workspace runs cache-only.
    let remote_url =
        opt_str(req, "remoteUrl").or_else(|| std::env::var("CURRICULUMD_REMOTE_URL").ok());
    let api_key = opt_str(req, "apiKey").or_else(|| std::env::var("CURRICULUMD_API_KEY").ok());
    state.remote = remote_url
        .map(|url| Box::new(HttpRemoteStore::new(&url, api_key)) as Box<dyn RemoteStore>);

    state.schedule.hydrate(&conn, state.remote.as_deref());

    state.workspace = Some(path.clone());
    state.cache = Some(conn);
    ok(
        &req.id,
        json!({
            "workspacePath": path.to_string_lossy(),
            "remoteConfigured": state.remote.is_some(),
            "scheduleCount": state.schedule.items().len(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        _ => None,
    }
}
