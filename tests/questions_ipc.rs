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

fn select_workspace(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    workspace: &PathBuf,
) {
    let _ = request_ok(
        stdin,
        reader,
        "select",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
}

fn sample_question() -> serde_json::Value {
    json!({
        "question": "Which enzyme synthesizes DNA from an RNA template?",
        "options": [
            "A) DNA polymerase",
            "B) Reverse transcriptase",
            "C) RNA polymerase",
            "D) Ligase"
        ],
        "correctAnswer": 1,
        "explanation": "Reverse transcriptase produces cDNA from RNA.",
        "topic": 3,
        "subtopic": "PCR, RT-PCR, and other NAAT",
        "difficulty": "Easy"
    })
}

#[test]
fn custom_question_crud_round_trip() {
    let workspace = temp_dir("curriculumd-questions-crud");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let baseline = request_ok(&mut stdin, &mut reader, "1", "questions.list", json!({}));
    let default_count = baseline["questions"].as_array().expect("questions").len();
    assert!(default_count >= 3);

    let added = request_ok(&mut stdin, &mut reader, "2", "questions.add", sample_question());
    let qid = added["question"]["id"].as_str().expect("id").to_string();
    assert_eq!(added["question"]["isCustom"], json!(true));

    let listed = request_ok(&mut stdin, &mut reader, "3", "questions.list", json!({}));
    assert_eq!(
        listed["questions"].as_array().unwrap().len(),
        default_count + 1
    );

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "questions.update",
        json!({ "id": qid, "patch": { "difficulty": "Hard" } }),
    );
    assert_eq!(updated["question"]["difficulty"], json!("Hard"));

    let missing = request(
        &mut stdin,
        &mut reader,
        "5",
        "questions.update",
        json!({ "id": "nope", "patch": { "difficulty": "Hard" } }),
    );
    assert_eq!(missing["error"]["code"].as_str(), Some("not_found"));

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "questions.delete",
        json!({ "id": qid }),
    );
    let final_list = request_ok(&mut stdin, &mut reader, "7", "questions.list", json!({}));
    assert_eq!(
        final_list["questions"].as_array().unwrap().len(),
        default_count
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn add_validates_options_and_answer_index() {
    let workspace = temp_dir("curriculumd-questions-validate");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let mut three_options = sample_question();
    three_options["options"] = json!(["A) one", "B) two", "C) three"]);
    let resp = request(&mut stdin, &mut reader, "1", "questions.add", three_options);
    assert_eq!(resp["error"]["code"].as_str(), Some("bad_params"));

    let mut bad_answer = sample_question();
    bad_answer["correctAnswer"] = json!(4);
    let resp = request(&mut stdin, &mut reader, "2", "questions.add", bad_answer);
    assert_eq!(resp["error"]["code"].as_str(), Some("bad_params"));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn deleting_a_default_question_suppresses_it() {
    let workspace = temp_dir("curriculumd-questions-suppress");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let before = request_ok(&mut stdin, &mut reader, "1", "questions.list", json!({}));
    let before_count = before["questions"].as_array().unwrap().len();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "questions.delete",
        json!({ "id": 1 }),
    );
    let after = request_ok(&mut stdin, &mut reader, "3", "questions.list", json!({}));
    let after_questions = after["questions"].as_array().unwrap();
    assert_eq!(after_questions.len(), before_count - 1);
    assert!(after_questions
        .iter()
        .all(|q| q["id"] != json!(1)));

    drop(stdin);
    let _ = child.wait();

    // Suppression is cache-resident and survives a restart.
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);
    let again = request_ok(&mut stdin, &mut reader, "1", "questions.list", json!({}));
    assert!(again["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["id"] != json!(1)));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn search_matches_question_subtopic_and_explanation() {
    let workspace = temp_dir("curriculumd-questions-search");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let hits = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "questions.search",
        json!({ "query": "HARDY-WEINBERG" }),
    );
    assert!(!hits["questions"].as_array().unwrap().is_empty());

    let by_subtopic = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "questions.search",
        json!({ "query": "next generation sequencing" }),
    );
    assert!(!by_subtopic["questions"].as_array().unwrap().is_empty());

    let none = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "questions.search",
        json!({ "query": "zzz-no-match" }),
    );
    assert!(none["questions"].as_array().unwrap().is_empty());

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn export_then_import_round_trips_custom_questions() {
    let workspace = temp_dir("curriculumd-questions-export");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    select_workspace(&mut stdin, &mut reader, &workspace);

    let _ = request_ok(&mut stdin, &mut reader, "1", "questions.add", sample_question());
    let exported = request_ok(&mut stdin, &mut reader, "2", "questions.export", json!({}));
    assert_eq!(exported["count"], json!(1));
    let text = exported["json"].as_str().expect("json text").to_string();

    let imported = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "questions.import",
        json!({ "json": text }),
    );
    assert_eq!(imported["imported"], json!(1));
    assert_eq!(imported["skipped"], json!(0));

    // Malformed entries are skipped, valid ones still land.
    let mixed = json!([
        sample_question(),
        { "question": "incomplete" }
    ])
    .to_string();
    let partial = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "questions.import",
        json!({ "json": mixed }),
    );
    assert_eq!(partial["imported"], json!(1));
    assert_eq!(partial["skipped"], json!(1));

    let not_json = request(
        &mut stdin,
        &mut reader,
        "5",
        "questions.import",
        json!({ "json": "not json at all" }),
    );
    assert_eq!(not_json["error"]["code"].as_str(), Some("bad_params"));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
