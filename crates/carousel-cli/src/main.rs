use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carousel_core::{AppConfig, SliderOptions};

mod commands;

use commands::simulate::SimulateArgs;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A responsive card carousel for the terminal")]
struct Cli {
    /// Configuration file (defaults to ~/.config/carousel/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal carousel
    Run {
        /// Reposition without transitions
        #[arg(long)]
        reduced_motion: bool,
        /// Number of cards to show (the configured set repeats as needed)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        cards: Option<u64>,
    },
    /// Run a script of operations against a fixed layout and print JSON lines
    Simulate(SimulateArgs),
    /// Print the effective configuration
    Config {
        /// Also save it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

/// Log to stderr, or to the log file while the TUI owns the terminal
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)?;

    let is_tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, is_tui)?;

    match cli.command {
        Some(Commands::Run {
            reduced_motion,
            cards,
        }) => {
            if reduced_motion {
                config.slider.reduced_motion = true;
            }
            if let Some(count) = cards {
                let count = usize::try_from(count)?;
                config.cards = config.cards().into_iter().cycle().take(count).collect();
            }
            commands::run::run(config)
        }
        None => commands::run::run(config),
        Some(Commands::Simulate(args)) => {
            let options = SliderOptions::from(&config.slider);
            let mut stdout = std::io::stdout().lock();
            commands::simulate::execute(&args, options, &mut stdout)
        }
        Some(Commands::Config { write }) => commands::config::run(&config, &config_path, write),
    }
}
