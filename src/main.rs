use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use voicecal::cli::{Cli, Commands, ConfigActions, join_transcript};
use voicecal::config::{self, Config};
use voicecal::event::CalendarEvent;
use voicecal::parser::{self, REPROMPT_MESSAGE, ScheduleError, format_timestamp};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // RUST_LOG may live in .env
    let env_file = dotenvy::dotenv();
    voicecal::init_logger();
    match env_file {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Effective config: {:?}", config);

    match cli.command {
        Commands::Parse { transcript, now, json } => {
            let transcript = join_transcript(&transcript);
            let now = match now {
                Some(raw) => parser::parse_reference_time(&raw)?,
                None => parser::korea_now(),
            };
            run_parse(&transcript, now, json, &config)
        }
        Commands::Serve { addr } => {
            info!("Starting voicecal API server");
            voicecal::api_server::start_api_server(config, addr).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => {
            match action {
                ConfigActions::Show => {
                    let rendered =
                        toml::to_string_pretty(&config).context("Failed to render config")?;
                    print!("{}", rendered);
                }
                ConfigActions::Path => match &cli.config {
                    Some(path) => println!("{}", path.display()),
                    None => println!("{}", config::get_config_path()?.display()),
                },
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_parse(
    transcript: &str,
    now: chrono::NaiveDateTime,
    json: bool,
    config: &Config,
) -> Result<ExitCode> {
    let schedule = match parser::parse(transcript, now) {
        Ok(schedule) => schedule,
        Err(ScheduleError::NotFound) => {
            println!("{}", REPROMPT_MESSAGE);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let event = CalendarEvent::from_schedule(&schedule, &config.calendar);
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        let title = if schedule.title.is_empty() {
            config.calendar.default_title.as_str()
        } else {
            schedule.title.as_str()
        };
        println!("Title: {}", title);
        println!("Start: {}", format_timestamp(&schedule.start));
        println!("End:   {}", format_timestamp(&schedule.end));
    }

    Ok(ExitCode::SUCCESS)
}
