//! Bulk month planning: resolving a program position to a calendar window
//! and generating a month's worth of weekly schedule entries from the
//! curriculum template.

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{cache_conn, remote_ref, required_str, required_u32};
use crate::ipc::types::{AppState, Request};
use crate::planner;
use crate::schedule::parse_canonical;
use chrono::Datelike;
use serde_json::json;

struct BulkParams {
    start_year: i32,
    start_month: u32,
    program_year: u32,
    month_index: u32,
}

fn parse_bulk_params(req: &Request) -> Result<BulkParams, serde_json::Value> {
    let start_date = required_str(req, "startDate")?;
    let Some(start) = parse_canonical(&start_date) else {
        return Err(err(
            &req.id,
            "bad_params",
            "startDate must be YYYY-MM-DD",
            None,
        ));
    };
    let program_year = required_u32(req, "year")?;
    if !(1..=2).contains(&program_year) {
        return Err(err(&req.id, "bad_params", "year must be 1 or 2", None));
    }
    let month_index = required_u32(req, "monthIndex")?;
    if month_index > 11 {
        return Err(err(&req.id, "bad_params", "monthIndex must be 0..=11", None));
    }
    Ok(BulkParams {
        start_year: start.year(),
        start_month: start.month(),
        program_year,
        month_index,
    })
}

fn handle_month_window(req: &Request) -> serde_json::Value {
    let params = match parse_bulk_params(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(window) = planner::month_window(
        params.start_year,
        params.start_month,
        params.program_year,
        params.month_index,
    ) else {
        return err(&req.id, "bad_params", "month position out of range", None);
    };
    let template = planner::plan_template(params.program_year, params.month_index);
    ok(
        &req.id,
        json!({
            "year": window.year,
            "month": window.month,
            "firstDay": window.first_day.format("%Y-%m-%d").to_string(),
            "lastDay": window.last_day.format("%Y-%m-%d").to_string(),
            "template": template.map(crate::curriculum::plan_month_to_json),
        }),
    )
}

fn handle_bulk_schedule(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cache = match cache_conn(&state.cache, req) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let params = match parse_bulk_params(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Some(template) = planner::plan_template(params.program_year, params.month_index) else {
        return err(&req.id, "not_found", "no template for that month", None);
    };
    let Some(window) = planner::month_window(
        params.start_year,
        params.start_month,
        params.program_year,
        params.month_index,
    ) else {
        return err(&req.id, "bad_params", "month position out of range", None);
    };

    let items = planner::expand_month(template, &window);
    let added = items.len();
    // Re-running the same month clears the previous run's entries for the
    // template's first topic before inserting the fresh batch.
    let first_topic = template
        .topics
        .first()
        .map(|t| t.topic)
        .unwrap_or_default();
    state.schedule.replace_for_bulk(first_topic, items);
    let synced = state.schedule.commit(cache, remote_ref(&state.remote));

    ok(
        &req.id,
        json!({
            "added": added,
            "firstDay": window.first_day.format("%Y-%m-%d").to_string(),
            "items": state.schedule.to_json(),
            "synced": synced,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "planner.monthWindow" => Some(handle_month_window(req)),
        "planner.bulkSchedule" => Some(handle_bulk_schedule(state, req)),
        _ => None,
    }
}
