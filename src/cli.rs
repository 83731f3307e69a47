use crate::commands::{
    assessments::{self, AssessmentCommands},
    chat,
    config::{self as config_cmd, ConfigCommands},
    courses::{self, CourseCommands},
    grades::{self, GradeCommands},
    learning_outcomes::{self, LearningOutcomeCommands},
    mappings::{self, MappingCommands},
    program_outcomes::{self, ProgramOutcomeCommands},
    students::{self, StudentCommands},
    Outcome,
};
use crate::config::{load_config, Config};
use crate::errors::Result;
use clap::{Parser, Subcommand};
use log::debug;
use po_api::PoApiClient;

#[derive(Parser, Debug)]
#[command(name = "pom")]
#[command(about = "Command-line client for the PO Manager API")]
#[command(version)]
pub struct Cli {
    /// API base URL, overrides the config file
    #[arg(long, global = true, env = "PO_MANAGER_API_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Courses
    Courses {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Program outcomes (PO)
    ProgramOutcomes {
        #[command(subcommand)]
        action: ProgramOutcomeCommands,
    },
    /// Learning outcomes (LO)
    LearningOutcomes {
        #[command(subcommand)]
        action: LearningOutcomeCommands,
    },
    /// LO to PO mappings
    Mappings {
        #[command(subcommand)]
        action: MappingCommands,
    },
    /// Students
    Students {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Assessments
    Assessments {
        #[command(subcommand)]
        action: AssessmentCommands,
    },
    /// Assessment to LO mappings
    AssessmentMappings {
        #[command(subcommand)]
        action: MappingCommands,
    },
    /// Grades
    Grades {
        #[command(subcommand)]
        action: GradeCommands,
    },
    /// Ask the course assistant
    Chat {
        /// Message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

pub async fn run_cli() -> Result<Outcome> {
    let cli = Cli::parse();
    run(cli).await
}

pub async fn run(cli: Cli) -> Result<Outcome> {
    run_with(cli, load_config).await
}

/// Execute a parsed command. `load` is only called when the config file is
/// actually needed: for `config` subcommands, or when no base URL was given.
pub async fn run_with<F>(cli: Cli, load: F) -> Result<Outcome>
where
    F: Fn() -> Result<Config>,
{
    let Cli { base_url, command } = cli;
    let client = || build_client(base_url.as_deref(), &load);

    match command {
        Commands::Config { action } => {
            let mut config = load()?;
            config_cmd::handle(action, &mut config)
        }
        Commands::Courses { action } => courses::handle(action, &client()?).await,
        Commands::ProgramOutcomes { action } => {
            program_outcomes::handle(action, &client()?).await
        }
        Commands::LearningOutcomes { action } => {
            learning_outcomes::handle(action, &client()?).await
        }
        Commands::Mappings { action } => mappings::handle_lo_to_po(action, &client()?).await,
        Commands::Students { action } => students::handle(action, &client()?).await,
        Commands::Assessments { action } => assessments::handle(action, &client()?).await,
        Commands::AssessmentMappings { action } => {
            mappings::handle_assessment_to_lo(action, &client()?).await
        }
        Commands::Grades { action } => grades::handle(action, &client()?).await,
        Commands::Chat { message } => chat::handle(message, &client()?).await,
    }
}

/// A non-blank `--base-url` (or its env var) wins and skips the config file
fn build_client<F>(base_url: Option<&str>, load: F) -> Result<PoApiClient>
where
    F: FnOnce() -> Result<Config>,
{
    match base_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            debug!("Using base URL from command line: {}", url);
            Ok(PoApiClient::with_base_url(url)?)
        }
        None => PoApiClient::from_config(&load()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConfigError, PomError};
    use clap::CommandFactory;
    use po_api::ApiError;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_resource_commands() {
        let cli = Cli::try_parse_from([
            "pom",
            "learning-outcomes",
            "map",
            "5",
            "--data",
            r#"{"program_outcome": 2}"#,
        ])
        .unwrap();

        match cli.command {
            Commands::LearningOutcomes {
                action: LearningOutcomeCommands::Map { id, data },
            } => {
                assert_eq!(id, "5");
                assert_eq!(data, r#"{"program_outcome": 2}"#);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_chat_joins_words() {
        let cli = Cli::try_parse_from(["pom", "chat", "how", "is", "PO1?"]).unwrap();
        match cli.command {
            Commands::Chat { message } => assert_eq!(message.join(" "), "how is PO1?"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_base_url_flag() {
        let cli = Cli::try_parse_from([
            "pom",
            "students",
            "po-scores",
            "9",
            "--base-url",
            "http://10.1.1.1:8000/api/",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://10.1.1.1:8000/api/"));
        assert!(matches!(
            cli.command,
            Commands::Students {
                action: StudentCommands::PoScores { raw: false, .. }
            }
        ));
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["pom", "courses", "delete"]).is_err());
    }

    fn unusable_config() -> Result<Config> {
        Err(ConfigError::DirectoryCreationFailed("Permission denied".to_string()).into())
    }

    #[tokio::test]
    async fn test_base_url_flag_does_not_touch_config() {
        let cli = Cli::try_parse_from([
            "pom",
            "--base-url",
            "http://127.0.0.1:1/api/",
            "courses",
            "list",
        ])
        .unwrap();

        let result = run_with(cli, unusable_config).await;

        assert!(matches!(
            result,
            Err(PomError::Api(ApiError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_config_error_surfaces_without_base_url() {
        let cli = Cli {
            base_url: None,
            command: Commands::Grades {
                action: GradeCommands::List,
            },
        };

        let result = run_with(cli, unusable_config).await;

        assert!(matches!(
            result,
            Err(PomError::Config(ConfigError::DirectoryCreationFailed(_)))
        ));
    }

    #[test]
    fn test_explicit_base_url_is_used() {
        let client = build_client(Some("http://10.1.1.1:8000/api/"), unusable_config).unwrap();
        assert_eq!(
            client.config().base_url().as_str(),
            "http://10.1.1.1:8000/api/"
        );
    }

    #[test]
    fn test_blank_base_url_falls_back_to_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let load = || -> Result<Config> {
            let mut config = Config::load_from(dir.path().join("config.ini"))?;
            config.set_base_url("http://from-file.test/api/")?;
            Ok(config)
        };

        let err = build_client(Some("   "), unusable_config).unwrap_err();
        assert!(matches!(err, PomError::Config(_)));

        let client = build_client(Some(""), load).unwrap();
        assert_eq!(
            client.config().base_url().as_str(),
            "http://from-file.test/api/"
        );
    }
}
