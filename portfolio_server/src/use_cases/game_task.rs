// Real-time driver for a `GameLoop`: owns the loop inside a tokio task,
// applies commands in arrival order and publishes snapshots.

use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::game::{GameLoop, GameSnapshot};
use crate::domain::ports::PositionSource;
use crate::domain::tuning::MIN_TIMER_PERIOD;

// Capacity for queued player commands.
pub const COMMAND_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Stop,
    Hit { target_id: u64 },
}

#[derive(Debug, Error)]
#[error("game task is no longer running")]
pub struct GameTaskClosed;

pub async fn game_task<P>(
    mut commands: mpsc::Receiver<GameCommand>,
    snapshots: watch::Sender<GameSnapshot>,
    tick_interval: Duration,
    mut game: GameLoop<P>,
) where
    P: PositionSource,
{
    // `interval` panics on a zero period.
    let mut interval = tokio::time::interval(tick_interval.max(MIN_TIMER_PERIOD));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    // Every handle is gone.
                    break;
                };
                // Catch the clock up first so timers due before the command fire first.
                let now = Instant::now();
                game.advance(now - last);
                last = now;
                apply(&mut game, command);
            }
            _ = interval.tick() => {
                let now = Instant::now();
                game.advance(now - last);
                last = now;
            }
        }

        snapshots.send_replace(game.snapshot());
    }

    info!("game task stopped");
}

fn apply<P: PositionSource>(game: &mut GameLoop<P>, command: GameCommand) {
    debug!(?command, "game command");
    match command {
        GameCommand::Start => game.start(),
        GameCommand::Stop => game.stop(),
        GameCommand::Hit { target_id } => {
            game.hit(target_id);
        }
    }
}

// Cloneable handle to a running game task.
#[derive(Clone)]
pub struct GameHandle {
    commands: mpsc::Sender<GameCommand>,
    snapshots: watch::Receiver<GameSnapshot>,
}

impl GameHandle {
    /// Spawns `game` on the current runtime, advancing it every `tick_interval`.
    pub fn spawn<P>(game: GameLoop<P>, tick_interval: Duration) -> Self
    where
        P: PositionSource + 'static,
    {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (snapshots_tx, snapshots_rx) = watch::channel(game.snapshot());

        tokio::spawn(game_task(commands_rx, snapshots_tx, tick_interval, game));

        Self {
            commands: commands_tx,
            snapshots: snapshots_rx,
        }
    }

    pub async fn start(&self) -> Result<(), GameTaskClosed> {
        self.send(GameCommand::Start).await
    }

    pub async fn stop(&self) -> Result<(), GameTaskClosed> {
        self.send(GameCommand::Stop).await
    }

    pub async fn hit(&self, target_id: u64) -> Result<(), GameTaskClosed> {
        self.send(GameCommand::Hit { target_id }).await
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    async fn send(&self, command: GameCommand) -> Result<(), GameTaskClosed> {
        self.commands.send(command).await.map_err(|_| GameTaskClosed)
    }
}
