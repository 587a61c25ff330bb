//! quizdesk CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod console;

#[derive(Parser)]
#[command(
    name = "quizdesk",
    version,
    about = "Terminal multiple-choice quiz system"
)]
struct Cli {
    /// Config file path (defaults to ./quizdesk.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Without a subcommand, quizdesk starts the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take one quiz directly, skipping the menu
    Take {
        /// Participant name or ID
        #[arg(long)]
        student: String,

        /// Subject file stem (e.g. "world_history") or path to a bank file
        #[arg(long)]
        subject: String,

        /// Directory holding subject files
        #[arg(long)]
        quizzes_dir: Option<PathBuf>,

        /// Results log path
        #[arg(long)]
        results_file: Option<PathBuf>,

        /// Ask at most this many questions
        #[arg(long)]
        limit: Option<usize>,

        /// Pass threshold in percent
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Show one participant's attempt history
    History {
        /// Participant name or ID
        #[arg(long)]
        student: String,

        /// Results log path
        #[arg(long)]
        results_file: Option<PathBuf>,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the ranked leaderboard
    Leaderboard {
        /// Only include attempts for this subject
        #[arg(long)]
        subject: Option<String>,

        /// Number of entries to show
        #[arg(long)]
        top: Option<usize>,

        /// Results log path
        #[arg(long)]
        results_file: Option<PathBuf>,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate question bank files
    Validate {
        /// Path to a bank file or a directory of banks
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config, quizzes directory, and sample subject file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdesk_core=info".parse().unwrap())
                .add_directive("quizdesk_store=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Take {
            student,
            subject,
            quizzes_dir,
            results_file,
            limit,
            threshold,
        }) => commands::take::execute(
            student,
            subject,
            quizzes_dir,
            results_file,
            limit,
            threshold,
            cli.config,
        ),
        Some(Commands::History {
            student,
            results_file,
            format,
        }) => commands::history::execute(student, results_file, format, cli.config),
        Some(Commands::Leaderboard {
            subject,
            top,
            results_file,
            format,
        }) => commands::leaderboard::execute(subject, top, results_file, format, cli.config),
        Some(Commands::Validate { bank }) => commands::validate::execute(bank),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::menu::execute(cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
