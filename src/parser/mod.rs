/// voicecal parser module
///
/// Korean transcript parsing and the timestamp format calendar payloads use.
pub mod korean;
pub mod timestamp;

pub use korean::{DayPeriod, EVENT_DURATION_MS, ParsedSchedule, ScheduleError, parse};
pub use timestamp::{KST_OFFSET, format_timestamp, korea_now, parse_reference_time};

/// Shown to the speaker when no date and time could be found.
pub const REPROMPT_MESSAGE: &str =
    "날짜와 시간을 포함해서 다시 말씀해 주세요. 예: '4월 28일 저녁 9시'";
