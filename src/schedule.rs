//! Schedule store: the date-sorted list of study entries and the commit
//! funnel every mutation goes through.
//!
//! Dates are canonical `YYYY-MM-DD` strings with no timezone component.
//! Legacy remote documents may still carry `{ "seconds": ... }` timestamp
//! objects; those are converted to the local calendar date on the way in and
//! never written back out.

use chrono::{Local, NaiveDate, TimeZone};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::cache::{self, KEY_SCHEDULE};
use crate::curriculum;
use crate::remote::RemoteStore;

pub const SCHEDULE_COLLECTION: &str = "schedule";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<String>,
    pub date: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_subtopics: Vec<String>,
}

/// Normalizes any date-shaped value to the canonical string form.
/// Idempotent: canonical strings pass through untouched.
pub fn normalize_date(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Object(map) => match map.get("seconds").and_then(Value::as_i64) {
            Some(seconds) => Local
                .timestamp_opt(seconds, 0)
                .single()
                .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            None => String::new(),
        },
        _ => String::new(),
    }
}

/// Strict parse of the canonical form. Malformed and empty strings both come
/// back `None`, which sorts before every real date.
pub fn parse_canonical(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Lenient decode of one raw document into an item. Remote documents written
/// by old clients carry numeric ids and missing flags; coerce rather than
/// reject so one bad field never drops the whole schedule.
pub fn decode_item(raw: &Value) -> Option<ScheduleItem> {
    let obj = raw.as_object()?;
    let id = match obj.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return None,
    };
    let topic = obj.get("topic").and_then(Value::as_str)?.to_string();
    let date = normalize_date(obj.get("date").unwrap_or(&Value::Null));
    Some(ScheduleItem {
        id,
        topic,
        subtopic: obj
            .get("subtopic")
            .and_then(Value::as_str)
            .map(str::to_string),
        date,
        level: obj
            .get("level")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        duration: obj
            .get("duration")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        completed: obj.get("completed").and_then(Value::as_bool).unwrap_or(false),
        completed_subtopics: obj
            .get("completedSubtopics")
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    })
}

pub fn decode_items(raw: &[Value]) -> Vec<ScheduleItem> {
    raw.iter().filter_map(decode_item).collect()
}

/// The in-memory schedule for the selected workspace. Every mutating
/// operation funnels through [`ScheduleBook::commit`], which is the only
/// place ordering and persistence happen.
#[derive(Default)]
pub struct ScheduleBook {
    items: Vec<ScheduleItem>,
}

impl ScheduleBook {
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn to_json(&self) -> Vec<Value> {
        self.items
            .iter()
            .map(|item| serde_json::to_value(item).unwrap_or(Value::Null))
            .collect()
    }

    /// Loads the schedule on workspace selection: a non-empty remote wins,
    /// otherwise whatever the cache last saw. A failed or empty remote fetch
    /// is not an error.
    pub fn hydrate(&mut self, cache: &Connection, remote: Option<&dyn RemoteStore>) {
        if let Some(remote) = remote {
            match remote.fetch_all(SCHEDULE_COLLECTION) {
                Ok(docs) if !docs.is_empty() => {
                    self.items = decode_items(&docs);
                    self.sort();
                    // Remote wins, so refresh the cache to match.
                    let payload = Value::Array(self.to_json());
                    if let Err(err) = cache::set_json(cache, KEY_SCHEDULE, &payload) {
                        log::warn!("schedule cache refresh failed: {err:#}");
                    }
                    return;
                }
                Ok(_) => {}
                Err(err) => log::warn!("schedule fetch failed, using cache: {err:#}"),
            }
        }
        let cached = cache::get_array(cache, KEY_SCHEDULE);
        self.items = decode_items(&cached);
        self.sort();
    }

    /// Adds one entry for a catalog topic; level and duration come from the
    /// catalog so callers only name the topic.
    pub fn add(&mut self, topic: &str, subtopic: Option<&str>, date: &str) -> Option<&ScheduleItem> {
        let catalog = curriculum::topic_by_name(topic)?;
        self.items.push(ScheduleItem {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            subtopic: subtopic.map(str::to_string),
            date: date.to_string(),
            level: catalog.level.to_string(),
            duration: catalog.duration.to_string(),
            completed: false,
            completed_subtopics: Vec::new(),
        });
        self.items.last()
    }

    /// Unknown ids are a silent no-op: the entry may have been removed by a
    /// concurrent client and the toggle is not worth surfacing as an error.
    pub fn toggle_completed(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.completed = !item.completed;
        }
    }

    pub fn update_date(&mut self, id: &str, date: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.date = date.to_string();
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn toggle_subtopic(&mut self, id: &str, subtopic: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            match item.completed_subtopics.iter().position(|s| s == subtopic) {
                Some(pos) => {
                    item.completed_subtopics.remove(pos);
                }
                None => item.completed_subtopics.push(subtopic.to_string()),
            }
        }
    }

    /// Bulk generation: clears prior entries whose topic matches
    /// `first_topic_name` (and only those), then appends the new batch.
    pub fn replace_for_bulk(&mut self, first_topic_name: &str, new_items: Vec<ScheduleItem>) {
        self.items.retain(|i| i.topic != first_topic_name);
        self.items.extend(new_items);
    }

    fn sort(&mut self) {
        // sort_by_key is stable, so same-day entries keep insertion order and
        // unparseable dates (None) group at the front.
        self.items.sort_by_key(|item| parse_canonical(&item.date));
    }

    /// The single persistence path: re-normalize dates, restore date order,
    /// write the cache, then push to the remote. The remote push is
    /// best-effort; returns whether it succeeded.
    pub fn commit(&mut self, cache: &Connection, remote: Option<&dyn RemoteStore>) -> bool {
        for item in &mut self.items {
            item.date = normalize_date(&Value::String(item.date.clone()));
        }
        self.sort();

        let payload = Value::Array(self.to_json());
        if let Err(err) = cache::set_json(cache, KEY_SCHEDULE, &payload) {
            log::warn!("schedule cache write failed: {err:#}");
        }

        match remote {
            Some(remote) => match remote.replace_all(SCHEDULE_COLLECTION, &self.to_json()) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("schedule sync failed, saved locally only: {err:#}");
                    false
                }
            },
            None => false,
        }
    }
}
