//! Korean date/time phrase parsing for voice transcripts.
//!
//! Turns a transcript such as "4월 28일 저녁 9시 회의" into a one-hour
//! schedule. The reference time is always passed in by the caller so the
//! parser never reads a clock.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

/// "N월 M일"
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2})월\s*([0-9]{1,2})일").unwrap());

/// Optional day-period word, then "N시" or "N반"
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(새벽|아침|오전|점심|낮|오후|저녁|밤)?\s*([0-9]{1,2})[시반]").unwrap()
});

/// Every event lasts exactly one hour.
pub const EVENT_DURATION_MS: i64 = 3_600_000;

/// Custom error type for transcript parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("No date and time found in transcript")]
    NotFound,
    #[error("Date {month}월 {day}일 {hour}시 is outside the supported calendar range")]
    OutOfRange { month: u32, day: u32, hour: u32 },
}

/// Korean words that qualify a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// 새벽
    Dawn,
    /// 아침
    Morning,
    /// 오전
    Forenoon,
    /// 점심
    Noon,
    /// 낮
    Daytime,
    /// 오후
    Afternoon,
    /// 저녁
    Evening,
    /// 밤
    Night,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 8] = [
        DayPeriod::Dawn,
        DayPeriod::Morning,
        DayPeriod::Forenoon,
        DayPeriod::Noon,
        DayPeriod::Daytime,
        DayPeriod::Afternoon,
        DayPeriod::Evening,
        DayPeriod::Night,
    ];

    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.word() == word)
    }

    pub fn word(self) -> &'static str {
        match self {
            DayPeriod::Dawn => "새벽",
            DayPeriod::Morning => "아침",
            DayPeriod::Forenoon => "오전",
            DayPeriod::Noon => "점심",
            DayPeriod::Daytime => "낮",
            DayPeriod::Afternoon => "오후",
            DayPeriod::Evening => "저녁",
            DayPeriod::Night => "밤",
        }
    }

    /// Canonical 24-hour hour the word stands for on its own.
    pub fn base_hour(self) -> u32 {
        match self {
            DayPeriod::Dawn => 3,
            DayPeriod::Morning | DayPeriod::Forenoon => 9,
            DayPeriod::Noon => 12,
            DayPeriod::Daytime => 13,
            DayPeriod::Afternoon => 15,
            DayPeriod::Evening => 19,
            DayPeriod::Night => 22,
        }
    }

    /// Convert a spoken hour into 24-hour form.
    ///
    /// Only periods whose base falls at or after noon shift the hour, and
    /// only when the spoken hour is still on the morning half of the clock.
    pub fn resolve_hour(self, hour: u32) -> u32 {
        if hour < 12 && self.base_hour() >= 12 {
            hour + 12
        } else {
            hour
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A one-hour event extracted from a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Transcript minus the date and time phrases. May be empty.
    pub title: String,
}

/// Parse a Korean transcript into a schedule relative to `now`.
///
/// `now` is Korea civil time. Returns [`ScheduleError::NotFound`] when either
/// the date phrase or the hour phrase is missing.
///
/// Minutes are always zero, including for the "N반" form.
pub fn parse(raw: &str, now: NaiveDateTime) -> Result<ParsedSchedule, ScheduleError> {
    let Some(date_caps) = DATE_RE.captures(raw) else {
        debug!("No date phrase in transcript: '{}'", raw);
        return Err(ScheduleError::NotFound);
    };
    let Some(time_caps) = TIME_RE.captures(raw) else {
        debug!("No hour phrase in transcript: '{}'", raw);
        return Err(ScheduleError::NotFound);
    };

    let month = capture_number(&date_caps, 1)?;
    let day = capture_number(&date_caps, 2)?;
    let spoken_hour = capture_number(&time_caps, 2)?;
    let period = time_caps
        .get(1)
        .and_then(|word| DayPeriod::from_word(word.as_str()));

    let hour = match period {
        Some(period) => period.resolve_hour(spoken_hour),
        None => spoken_hour,
    };
    debug!(
        "Matched {}월 {}일, hour {} ({:?}) -> {}",
        month, day, spoken_hour, period, hour
    );

    let out_of_range = || ScheduleError::OutOfRange { month, day, hour };
    let mut start = civil_datetime(now.year(), month, day, hour).ok_or_else(out_of_range)?;

    if start < now {
        start = civil_datetime(start.year() + 1, start.month(), start.day(), start.hour())
            .ok_or_else(out_of_range)?;
        debug!("Resolved date already passed, moved to next year: {}", start);
    }

    let end = start
        .checked_add_signed(Duration::milliseconds(EVENT_DURATION_MS))
        .ok_or_else(out_of_range)?;

    let without_date = DATE_RE.replace(raw, "");
    let title = TIME_RE.replace(&without_date, "").trim().to_string();

    Ok(ParsedSchedule { start, end, title })
}

fn capture_number(caps: &Captures<'_>, index: usize) -> Result<u32, ScheduleError> {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(ScheduleError::NotFound)
}

/// Build a civil date-time, carrying overflowing fields into the next unit.
///
/// Month 13 becomes January of the following year, month 0 December of the
/// previous one; day 0 is the last day of the previous month; hour 24 and
/// above spill into the following days.
fn civil_datetime(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    let january = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => january.checked_sub_months(Months::new(1))?,
        m => january.checked_add_months(Months::new(m - 1))?,
    };
    let date = first_of_month.checked_add_signed(Duration::days(i64::from(day) - 1))?;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::hours(i64::from(hour)))
}
