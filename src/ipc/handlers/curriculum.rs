use crate::curriculum;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{opt_str, required_u32};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_topics(req: &Request) -> serde_json::Value {
    let level = opt_str(req, "level");
    let topics: Vec<_> = curriculum::TOPICS
        .iter()
        .filter(|t| level.as_deref().map(|l| t.level == l).unwrap_or(true))
        .map(curriculum::topic_to_json)
        .collect();
    ok(&req.id, json!({ "topics": topics }))
}

fn handle_plan(req: &Request) -> serde_json::Value {
    let year = match required_u32(req, "year") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(months) = curriculum::plan_year(year) else {
        return err(&req.id, "bad_params", "year must be 1 or 2", None);
    };
    let months: Vec<_> = months.iter().map(curriculum::plan_month_to_json).collect();
    ok(&req.id, json!({ "year": year, "months": months }))
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "curriculum.topics" => Some(handle_topics(req)),
        "curriculum.plan" => Some(handle_plan(req)),
        _ => None,
    }
}
