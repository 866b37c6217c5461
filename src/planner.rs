//! Planner arithmetic: mapping a program position (year, month index) onto
//! the calendar, and expanding a month into weekly schedule entries.

use chrono::{Months, NaiveDate};

use crate::curriculum::{self, PlanMonth};
use crate::schedule::ScheduleItem;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Maps a 0-based month index within program year 1 or 2 onto the calendar,
/// anchored at the program start. Carries across year boundaries, so a
/// January start with index 11 lands in December and year 2 index 0 lands in
/// the following January.
pub fn month_window(
    start_year: i32,
    start_month: u32,
    program_year: u32,
    month_index: u32,
) -> Option<MonthWindow> {
    if !(1..=12).contains(&start_month) || !(1..=2).contains(&program_year) || month_index > 11 {
        return None;
    }
    let target_month = start_month + month_index;
    let target_year = start_year + (program_year as i32 - 1);
    let final_year = target_year + ((target_month - 1) / 12) as i32;
    let final_month = (target_month - 1) % 12 + 1;

    let first_day = NaiveDate::from_ymd_opt(final_year, final_month, 1)?;
    let last_day = first_day
        .checked_add_months(Months::new(1))?
        .pred_opt()?;
    Some(MonthWindow {
        year: final_year,
        month: final_month,
        first_day,
        last_day,
    })
}

/// Weekly slots starting at `first_day`: day 1, 8, 15, ... Entries may run
/// past the end of the month; the front end clips the display, not the data.
pub fn weekly_dates(first_day: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .filter_map(|i| first_day.checked_add_days(chrono::Days::new(7 * i as u64)))
        .collect()
}

/// Expands one planner template month into schedule entries: one entry per
/// template topic, spaced a week apart from the first day of the window.
pub fn expand_month(template: &PlanMonth, window: &MonthWindow) -> Vec<ScheduleItem> {
    let dates = weekly_dates(window.first_day, template.topics.len() as u32);
    template
        .topics
        .iter()
        .zip(dates)
        .map(|(plan_topic, date)| ScheduleItem {
            id: Uuid::new_v4().to_string(),
            topic: plan_topic.topic.to_string(),
            subtopic: None,
            date: date.format("%Y-%m-%d").to_string(),
            level: plan_topic.level.to_string(),
            duration: plan_topic.duration.to_string(),
            completed: false,
            completed_subtopics: Vec::new(),
        })
        .collect()
}

/// Looks up the planner template for a program position.
pub fn plan_template(program_year: u32, month_index: u32) -> Option<&'static PlanMonth> {
    curriculum::plan_year(program_year)?.get(month_index as usize)
}
