pub mod core;
pub mod curriculum;
pub mod images;
pub mod planner;
pub mod projects;
pub mod questions;
pub mod resources;
pub mod schedule;
