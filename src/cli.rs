use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// voicecal - turn Korean voice transcripts into calendar events
#[derive(Debug, Parser)]
#[command(name = "voicecal")]
#[command(about = "Turn Korean voice transcripts into calendar events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a transcript into an event
    Parse {
        /// Transcript text, e.g. 4월 28일 저녁 9시 회의
        #[arg(required = true, num_args = 1..)]
        transcript: Vec<String>,

        /// Reference time in Seoul (YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        now: Option<String>,

        /// Print the calendar event resource as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Address to listen on, overrides the config file
        #[arg(long)]
        addr: Option<String>,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,
}

/// Join the words of a `parse` transcript back into one string
pub fn join_transcript(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command_collects_words() {
        let cli = Cli::try_parse_from([
            "voicecal", "parse", "4월", "28일", "저녁", "9시", "회의", "--now", "2025-01-01T00:00:00",
        ])
        .unwrap();

        match cli.command {
            Commands::Parse { transcript, now, json } => {
                assert_eq!(join_transcript(&transcript), "4월 28일 저녁 9시 회의");
                assert_eq!(now.as_deref(), Some("2025-01-01T00:00:00"));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["voicecal", "config", "show", "--config", "/tmp/v.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/v.toml")));
        assert!(matches!(cli.command, Commands::Config { action: ConfigActions::Show }));
    }

    #[test]
    fn test_parse_requires_transcript() {
        assert!(Cli::try_parse_from(["voicecal", "parse"]).is_err());
    }
}
