//! DevMind CLI - multi-agent dashboard mockup

use clap::{Parser, Subcommand};
use colored::Colorize;

use devmind::error::FixSuggestion;
use devmind::{report, tui};

#[derive(Parser)]
#[command(name = "devmind")]
#[command(about = "DevMind AI - multi-agent system dashboard mockup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the terminal dashboard (default)
    Tui,

    /// Print the reasoning trace
    Trace {
        /// Replay entries with the dashboard's reveal cadence
        #[arg(long)]
        replay: bool,
    },

    /// Print the QA audit summary
    Qa,

    /// Dump all fixtures as JSON
    Export,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => tui::run().await,
        Commands::Trace { replay } => {
            if replay {
                report::replay_trace().await
            } else {
                report::print_trace();
                Ok(())
            }
        }
        Commands::Qa => {
            report::print_qa();
            Ok(())
        }
        Commands::Export => report::export_json().map(|json| println!("{}", json)),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}
