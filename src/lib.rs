pub mod api_server;
pub mod cli;
pub mod config;
pub mod event;
pub mod parser;

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use event::{CalendarEvent, schedule_from_transcript};
pub use parser::{ParsedSchedule, ScheduleError, format_timestamp, parse};
