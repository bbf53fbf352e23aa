//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use teamgrade::output::OutputMode;

/// teamgrade - client for the grading and team-management backend
#[derive(Parser, Debug)]
#[command(
    name = "teamgrade",
    version,
    about = "Client for the student-project grading backend",
    long_about = "Query and update teams, sprints, students, grades and notifications.\n\n\
                  The backend URL comes from ~/.teamgrade/config.toml or TEAMGRADE_API_URL.\n\
                  Log in once; the session is kept in ~/.teamgrade/session.toml."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        /// Account e-mail
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session state
    Status,

    /// List teams of the selected project
    Teams {
        /// Show a single team
        #[arg(long)]
        id: Option<i64>,
    },

    /// List sprints in order
    Sprints {
        /// Only sprints that end with a graded milestone
        #[arg(long)]
        graded: bool,
    },

    /// List students
    Students {
        /// Only members of this team
        #[arg(long)]
        team: Option<i64>,
    },

    /// List your notifications
    Notifications {
        /// Toggle the read flag of a notification
        #[arg(long, value_name = "ID")]
        check: Option<i64>,
    },

    /// Grade exports
    Grades {
        #[command(subcommand)]
        action: GradesAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum GradesAction {
    /// Download the grade spreadsheet
    Download {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli.command, output_mode))
}

async fn dispatch(command: Option<Command>, output_mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Some(Command::Login { email, password }) => {
            commands::login(&email, &password, output_mode).await
        },
        Some(Command::Logout) => commands::logout(output_mode),
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Teams { id }) => commands::teams(id, output_mode).await,
        Some(Command::Sprints { graded }) => commands::sprints(graded, output_mode).await,
        Some(Command::Students { team }) => commands::students(team, output_mode).await,
        Some(Command::Notifications { check }) => commands::notifications(check, output_mode).await,
        Some(Command::Grades { action }) => match action {
            GradesAction::Download { output } => {
                commands::download_grades(output.as_deref(), output_mode).await
            },
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("teamgrade v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("teamgrade v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'teamgrade --help' for usage");
                println!("Run 'teamgrade login <email> -p <password>' to get started");
            }
            Ok(())
        },
    }
}
