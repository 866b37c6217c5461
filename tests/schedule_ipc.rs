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

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({ "id": id, "method": method, "params": params });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");
    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert_eq!(
        value.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().expect("result")
}

#[test]
fn schedule_crud_keeps_date_order_and_completion() {
    let workspace = temp_dir("curriculumd-schedule-crud");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let later = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.add",
        json!({ "topic": "Quality", "subtopic": "Quality Control", "date": "2024-06-15" }),
    );
    assert_eq!(later["synced"], json!(false));
    let later_id = later["item"]["id"].as_str().expect("id").to_string();
    // Level and duration are filled from the topic catalog.
    assert_eq!(later["item"]["level"], json!("Core"));
    assert_eq!(later["item"]["duration"], json!("3 weeks"));

    let earlier = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.add",
        json!({ "topic": "Techniques and Methods", "date": "2024-02-01" }),
    );
    let earlier_id = earlier["item"]["id"].as_str().expect("id").to_string();

    let listed = request_ok(&mut stdin, &mut reader, "4", "schedule.list", json!({}));
    let items = listed["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"].as_str(), Some(earlier_id.as_str()));
    assert_eq!(items[1]["id"].as_str(), Some(later_id.as_str()));

    let toggled = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.toggleCompleted",
        json!({ "id": later_id }),
    );
    let toggled_item = toggled["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"].as_str() == Some(later_id.as_str()))
        .expect("toggled item");
    assert_eq!(toggled_item["completed"], json!(true));

    // Moving the later entry before the earlier one reorders the list.
    let moved = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "schedule.updateDate",
        json!({ "id": later_id, "date": "2024-01-01" }),
    );
    let moved_items = moved["items"].as_array().unwrap();
    assert_eq!(moved_items[0]["id"].as_str(), Some(later_id.as_str()));

    let sub = request_ok(
        &mut stdin,
        &mut reader,
        "7",
        "schedule.toggleSubtopic",
        json!({ "id": earlier_id, "subtopic": "FISH" }),
    );
    let sub_item = sub["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"].as_str() == Some(earlier_id.as_str()))
        .expect("item");
    assert_eq!(sub_item["completedSubtopics"], json!(["FISH"]));

    let removed = request_ok(
        &mut stdin,
        &mut reader,
        "8",
        "schedule.remove",
        json!({ "id": earlier_id }),
    );
    assert_eq!(removed["items"].as_array().unwrap().len(), 1);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn schedule_survives_restart_via_cache() {
    let workspace = temp_dir("curriculumd-schedule-restart");

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let added = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.add",
        json!({ "topic": "Quality", "date": "2024-06-15" }),
    );
    let id = added["item"]["id"].as_str().expect("id").to_string();
    drop(stdin);
    let _ = child.wait();

    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let selected = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    assert_eq!(selected["scheduleCount"], json!(1));
    let listed = request_ok(&mut stdin, &mut reader, "2", "schedule.list", json!({}));
    let items = listed["items"].as_array().expect("items");
    assert_eq!(items[0]["id"].as_str(), Some(id.as_str()));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn add_with_unknown_topic_is_rejected() {
    let workspace = temp_dir("curriculumd-schedule-unknown-topic");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let resp = request(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.add",
        json!({ "topic": "Astrology", "date": "2024-06-15" }),
    );
    assert_eq!(resp.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        resp["error"]["code"].as_str(),
        Some("not_found"),
        "{}",
        resp
    );
    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
