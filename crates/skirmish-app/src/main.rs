//! Headless skirmish runner.

// Allow print in the CLI binary
#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use skirmish_app::game_loop::{spawn_game_loop, LoopConfig};
use skirmish_app::notify::LogSink;
use skirmish_app::state::{shared_snapshot, GameLoopCommand};
use skirmish_core::config::BattleSettings;
use skirmish_sim::engine::{BattleEngine, SimConfig};

/// Run a skirmish between a configured roster and a drawn opponent.
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Battle settings JSON file (default roster when omitted)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Opponent draw seed; overrides the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long, default_value = "36000")]
    max_ticks: u64,

    /// Pace the battle at 60 ticks per second
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    print_final: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_format);

    let settings = match &args.settings {
        Some(path) => match BattleSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                error!(path = %path.display(), %err, "invalid battle settings");
                return ExitCode::FAILURE;
            }
        },
        None => BattleSettings::default(),
    };

    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or(SimConfig::default().seed);
    let engine = match BattleEngine::new(SimConfig { seed }, &settings.player) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "invalid roster");
            return ExitCode::FAILURE;
        }
    };
    let config = LoopConfig {
        max_ticks: Some(args.max_ticks),
        paced: args.realtime,
    };

    let latest = shared_snapshot();
    let (cmd_tx, handle) = match spawn_game_loop(engine, config, LogSink, latest.clone()) {
        Ok(spawned) => spawned,
        Err(err) => {
            error!(%err, "failed to spawn game loop thread");
            return ExitCode::FAILURE;
        }
    };

    if args.realtime {
        // The paced loop keeps publishing the frozen battle; stop it once
        // a result shows up.
        while !handle.is_finished() {
            std::thread::sleep(Duration::from_millis(100));
            let decided = latest
                .lock()
                .map(|snap| snap.as_ref().is_some_and(|s| s.result.is_some()))
                .unwrap_or(false);
            if decided {
                let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                break;
            }
        }
    }

    let outcome = match handle.join() {
        Ok(outcome) => outcome,
        Err(_) => {
            error!("game loop thread panicked");
            return ExitCode::FAILURE;
        }
    };

    match outcome.result {
        Some(result) => info!(?result, ticks = outcome.ticks, "battle over"),
        None => info!(ticks = outcome.ticks, "battle undecided"),
    }

    if args.print_final {
        let Ok(lock) = latest.lock() else {
            error!("snapshot lock poisoned");
            return ExitCode::FAILURE;
        };
        match serde_json::to_string_pretty(&*lock) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize snapshot");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
