use clap::{Parser, Subcommand};
use ringside_cli::commands;
use ringside_cli::readline;
use ringside_core::AppState;
use std::io::Write;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ringside=info".into()),
        )
        .init();

    let state = Arc::new(RwLock::new(AppState::new()));

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, Arc::clone(&state)).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "replay transcript analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more replay transcripts and fold them into the roster
    Analyze {
        paths: Vec<String>,
    },
    /// Summarize every player tracked so far
    Roster,
    /// Show one player's team in detail
    Show {
        #[arg(short, long)]
        player: String,
    },
    /// Write the roster as JSON
    Export {
        #[arg(short, long)]
        path: String,
    },
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    Config,
    Exit,
}

async fn respond(line: &str, state: Arc<RwLock<AppState>>) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "ringside".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Analyze { paths }) => commands::analyze(paths, Arc::clone(&state)).await?,
        Some(Commands::Roster) => commands::roster(Arc::clone(&state)).await?,
        Some(Commands::Show { player }) => commands::show(player, Arc::clone(&state)).await?,
        Some(Commands::Export { path }) => commands::export(path, Arc::clone(&state)).await?,
        Some(Commands::SetDirectory { path }) => {
            commands::set_directory(path, Arc::clone(&state)).await?
        }
        Some(Commands::Config) => commands::show_settings(Arc::clone(&state)).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
