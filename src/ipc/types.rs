use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::remote::RemoteStore;
use crate::schedule::ScheduleBook;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub cache: Option<Connection>,
    pub remote: Option<Box<dyn RemoteStore>>,
    pub schedule: ScheduleBook,
}
