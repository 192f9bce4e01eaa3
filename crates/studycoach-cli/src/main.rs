use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studycoach", version, about = "StudyCoach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Study log and exam date management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Score prediction and exam urgency
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreAction,
    },
    /// Talk to the study-coach proxy
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Account management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Score { action } => commands::score::run(action),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
