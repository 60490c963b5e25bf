//! Game loop thread: runs the battle engine at 60Hz and publishes snapshots.
//!
//! Commands arrive via an `mpsc` channel. Snapshots are stored in shared
//! state for polling and their notifications go to the sink.

use std::io;
use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skirmish_core::constants::TICK_RATE;
use skirmish_core::state::BattleSnapshot;
use skirmish_sim::engine::BattleEngine;

use crate::notify::{NotificationSink, RateLimitedSink};
use crate::state::{GameLoopCommand, LoopOutcome, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs a battle.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Stop after this many loop iterations, frozen ones included.
    pub max_ticks: Option<u64>,
    /// Sleep to hold `TICK_RATE`. When off the loop runs flat out and
    /// stops as soon as the battle has a result.
    pub paced: bool,
}

/// Spawns the game loop for `engine` in a new thread.
///
/// Returns the command sender and a handle that yields the outcome.
pub fn spawn_game_loop<S>(
    engine: BattleEngine,
    config: LoopConfig,
    sink: S,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopOutcome>)>
where
    S: NotificationSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || {
            run_game_loop(
                engine,
                config,
                RateLimitedSink::new(sink),
                cmd_rx,
                &latest_snapshot,
            )
        })?;

    Ok((cmd_tx, handle))
}

/// The instant the sink should see for a snapshot. Paced runs use the wall
/// clock; unpaced runs use simulation time so rate limits still space
/// notifications by ticks rather than by how fast the host is.
pub fn sink_clock(started: Instant, paced: bool, snapshot: &BattleSnapshot) -> Instant {
    if paced {
        return Instant::now();
    }
    let ticks = u32::try_from(snapshot.time.tick).unwrap_or(u32::MAX);
    started + TICK_DURATION.saturating_mul(ticks)
}

/// The game loop. Runs until a command, a disconnect, or the tick limit
/// stops it.
fn run_game_loop<S: NotificationSink>(
    mut engine: BattleEngine,
    config: LoopConfig,
    mut sink: RateLimitedSink<S>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<BattleSnapshot>>,
) -> LoopOutcome {
    let started = Instant::now();
    let mut next_tick_time = started;
    let mut iterations = 0u64;

    let outcome = |engine: &BattleEngine, abandoned: bool| LoopOutcome {
        result: if abandoned { None } else { engine.world().result },
        ticks: engine.time().tick,
        abandoned,
    };

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Abandon) => {
                    info!(tick = engine.time().tick, "battle abandoned");
                    return outcome(&engine, true);
                }
                Ok(GameLoopCommand::Shutdown) => return outcome(&engine, false),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return outcome(&engine, false),
            }
        }

        // 2. Advance one tick (a finished battle stays frozen)
        let mut snapshot = engine.tick();
        iterations += 1;

        // 3. Hand notifications to the sink
        let now = sink_clock(started, config.paced, &snapshot);
        for notification in snapshot.notifications.iter() {
            sink.notify_at(notification, now);
        }
        let finished = !snapshot.running;

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(std::mem::take(&mut snapshot));
        }

        if config.max_ticks.is_some_and(|limit| iterations >= limit) {
            debug!(iterations, "tick limit reached");
            return outcome(&engine, false);
        }
        if finished && !config.paced {
            return outcome(&engine, false);
        }
        if !config.paced {
            continue;
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
