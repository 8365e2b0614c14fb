//! Calendar event resource sent to the Google Calendar insert call.
//
// Field names follow the Calendar API JSON, hence camelCase on the wire.

use crate::config::CalendarConfig;
use crate::parser::{self, ParsedSchedule, ScheduleError, format_timestamp};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub reminders: EventReminders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: ReminderMethod,
    /// Minutes before the event starts
    pub minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Popup,
}

impl EventDateTime {
    fn new(ts: &NaiveDateTime, time_zone: &str) -> Self {
        Self { date_time: format_timestamp(ts), time_zone: time_zone.to_string() }
    }
}

impl CalendarEvent {
    pub fn from_schedule(schedule: &ParsedSchedule, config: &CalendarConfig) -> Self {
        let summary = if schedule.title.is_empty() {
            debug!("Empty title, using default '{}'", config.default_title);
            config.default_title.clone()
        } else {
            schedule.title.clone()
        };

        Self {
            summary,
            start: EventDateTime::new(&schedule.start, &config.time_zone),
            end: EventDateTime::new(&schedule.end, &config.time_zone),
            reminders: EventReminders {
                use_default: false,
                overrides: config.reminders.clone(),
            },
        }
    }
}

/// Parse a transcript and build the event resource for it in one step.
pub fn schedule_from_transcript(
    transcript: &str,
    now: NaiveDateTime,
    config: &CalendarConfig,
) -> Result<CalendarEvent, ScheduleError> {
    let schedule = parser::parse(transcript, now)?;
    let event = CalendarEvent::from_schedule(&schedule, config);
    info!(
        "Scheduled '{}' from {} to {}",
        event.summary, event.start.date_time, event.end.date_time
    );
    Ok(event)
}
