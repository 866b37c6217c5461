use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_curriculumd");
    let mut child = Command::new(exe)
        .env_remove("CURRICULUMD_REMOTE_URL")
        .env_remove("CURRICULUMD_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn curriculumd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn send(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

/// Like `send`, but fails the test if the method fell through to the
/// unknown-method branch. The dispatch-coverage test below relies on this.
fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = send(stdin, reader, id, method, params);
    if value.get("ok").and_then(|v| v.as_bool()) == Some(false) {
        let code = value
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        assert_ne!(
            code, "not_implemented",
            "unexpected unknown method for {}",
            method
        );
    }
    value
}

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let workspace = temp_dir("curriculumd-router-smoke");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request(&mut stdin, &mut reader, "1", "health", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "2",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request(&mut stdin, &mut reader, "3", "curriculum.topics", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "4",
        "curriculum.plan",
        json!({ "year": 1 }),
    );
    let added = request(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.add",
        json!({ "topic": "Quality", "date": "2024-05-10" }),
    );
    let item_id = added
        .get("result")
        .and_then(|v| v.get("item"))
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_str())
        .expect("item id")
        .to_string();
    let _ = request(&mut stdin, &mut reader, "6", "schedule.list", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "7",
        "schedule.toggleCompleted",
        json!({ "id": item_id }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "8",
        "planner.monthWindow",
        json!({ "startDate": "2024-01-15", "year": 1, "monthIndex": 0 }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "9",
        "planner.bulkSchedule",
        json!({ "startDate": "2024-01-15", "year": 1, "monthIndex": 0 }),
    );
    let _ = request(&mut stdin, &mut reader, "10", "questions.list", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "11",
        "questions.search",
        json!({ "query": "sequencing" }),
    );
    let _ = request(&mut stdin, &mut reader, "12", "resources.list", json!({}));
    let _ = request(&mut stdin, &mut reader, "13", "projects.list", json!({}));
    let _ = request(&mut stdin, &mut reader, "14", "images.list", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "15",
        "schedule.remove",
        json!({ "id": item_id }),
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn unknown_method_reports_not_implemented() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let resp = send(&mut stdin, &mut reader, "1", "no.such.method", json!({}));
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        resp.get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_implemented")
    );
    drop(stdin);
    let _ = child.wait();
}

#[test]
fn mutations_before_workspace_select_report_no_workspace() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let resp = request(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.add",
        json!({ "topic": "Quality", "date": "2024-05-10" }),
    );
    assert_eq!(
        resp.get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("no_workspace")
    );
    drop(stdin);
    let _ = child.wait();
}
