// Whack-a-target minigame: a bounded, self-expiring set of targets driven by
// virtual-time timers.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use super::scheduler::Scheduler;
use crate::domain::entities::{HitState, Target, TargetSnapshot};
use crate::domain::ports::PositionSource;
use crate::domain::tuning::GameTuning;

// Work queued on the game clock. Spawns carry the generation they were
// scheduled in; `start` and `stop` bump the generation, which cancels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameTask {
    SpawnTick { generation: u64 },
    Respawn { generation: u64 },
    Expire { target_id: u64 },
    RemoveHit { target_id: u64 },
}

// Read-only view handed to the presentation layer after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub targets: Vec<TargetSnapshot>,
    pub score: u32,
    pub is_active: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            score: 0,
            is_active: false,
            elapsed: Duration::ZERO,
        }
    }
}

pub struct GameLoop<P> {
    tuning: GameTuning,
    positions: P,
    timers: Scheduler<GameTask>,
    targets: Vec<Target>,
    score: u32,
    active: bool,
    generation: u64,
    next_target_id: u64,
}

impl<P> GameLoop<P>
where
    P: PositionSource,
{
    pub fn new(positions: P) -> Self {
        Self::with_tuning(positions, GameTuning::default())
    }

    // Zero periods are raised to the timer floor so `advance` always returns.
    pub fn with_tuning(positions: P, tuning: GameTuning) -> Self {
        Self {
            tuning: tuning.normalized(),
            positions,
            timers: Scheduler::new(),
            targets: Vec::new(),
            score: 0,
            active: false,
            generation: 0,
            next_target_id: 1,
        }
    }

    /// Starts (or restarts) a round: score reset, board cleared, one target
    /// spawned immediately and the repeating spawn tick armed.
    pub fn start(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.score = 0;
        self.targets.clear();

        self.spawn_target();
        let generation = self.generation;
        self.timers
            .schedule_in(self.tuning.spawn_interval, GameTask::SpawnTick { generation });

        info!(generation, "game started");
    }

    /// Ends the round. Pending spawns are cancelled; expiry timers still in
    /// the queue fire later against an empty board and do nothing.
    pub fn stop(&mut self) {
        if !self.active && self.targets.is_empty() {
            return;
        }
        self.generation = self.generation.wrapping_add(1);
        self.active = false;
        self.targets.clear();

        info!(score = self.score, "game stopped");
    }

    /// Registers a hit on `target_id`. Unknown ids and targets already hit are
    /// ignored. Returns whether the hit scored.
    pub fn hit(&mut self, target_id: u64) -> bool {
        let Some(target) = self
            .targets
            .iter_mut()
            .find(|t| t.id == target_id && !t.is_hit())
        else {
            debug!(target_id, "hit ignored");
            return false;
        };

        target.hit_state = HitState::Hit;
        self.score = self.score.saturating_add(self.tuning.hit_award);
        self.timers
            .schedule_in(self.tuning.hit_linger, GameTask::RemoveHit { target_id });

        // Not aligned with the spawn tick, so rapid hits can grow the board.
        if self.active {
            let generation = self.generation;
            self.timers
                .schedule_in(self.tuning.respawn_delay, GameTask::Respawn { generation });
        }

        info!(target_id, score = self.score, "target hit");
        true
    }

    // Moves the game clock forward, firing every timer that falls due.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.timers.now() + dt;
        while let Some((_, task)) = self.timers.pop_due(until) {
            self.run(task);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            targets: self.targets.iter().map(TargetSnapshot::from).collect(),
            score: self.score,
            is_active: self.active,
            elapsed: self.timers.now(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.now()
    }

    fn run(&mut self, task: GameTask) {
        match task {
            GameTask::SpawnTick { generation } => {
                if !self.is_current(generation) {
                    return;
                }
                self.spawn_target();
                self.timers
                    .schedule_in(self.tuning.spawn_interval, GameTask::SpawnTick { generation });
            }
            GameTask::Respawn { generation } => {
                if self.is_current(generation) {
                    self.spawn_target();
                }
            }
            GameTask::Expire { target_id } | GameTask::RemoveHit { target_id } => {
                self.remove_target(target_id);
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.active && generation == self.generation
    }

    fn spawn_target(&mut self) {
        let id = self.next_target_id;
        self.next_target_id = self.next_target_id.wrapping_add(1);

        let (min, max) = (self.tuning.position_min, self.tuning.position_max);
        let target = Target {
            id,
            x: self.positions.next_percent(min, max),
            y: self.positions.next_percent(min, max),
            hit_state: HitState::Active,
            spawned_at: self.timers.now(),
        };
        debug!(target_id = id, x = target.x, y = target.y, "target spawned");

        self.targets.push(target);
        self.timers
            .schedule_in(self.tuning.target_ttl, GameTask::Expire { target_id: id });
    }

    // Remove-if-present; late timers for cleared targets land here harmlessly.
    fn remove_target(&mut self, target_id: u64) {
        self.targets.retain(|t| t.id != target_id);
    }
}
