//! Gameplay tuning for the whack-a-target minigame.
//!
//! Keep this separate from runtime/server configuration (tick rates, ports, etc.).

use std::time::Duration;

// Shortest period a repeating or expiring timer may use; zero would refire at
// the same instant forever.
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy)]
pub struct GameTuning {
    /// Period of the repeating spawn tick while the game runs.
    pub spawn_interval: Duration,

    /// Lifetime of a target, hit or not.
    pub target_ttl: Duration,

    /// How long a hit target stays visible before removal.
    pub hit_linger: Duration,

    /// Delay before the extra spawn that follows a hit.
    pub respawn_delay: Duration,

    /// Score awarded per hit.
    pub hit_award: u32,

    /// Spawn positions are drawn uniformly from `position_min..=position_max` percent.
    pub position_min: f32,
    pub position_max: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            spawn_interval: Duration::from_secs(2),
            target_ttl: Duration::from_secs(3),
            hit_linger: Duration::from_secs(1),
            respawn_delay: Duration::from_secs(5),
            hit_award: 10,
            position_min: 10.0,
            position_max: 90.0,
        }
    }
}

impl GameTuning {
    /// Raises the spawn interval and target lifetime to [`MIN_TIMER_PERIOD`].
    pub fn normalized(mut self) -> Self {
        self.spawn_interval = self.spawn_interval.max(MIN_TIMER_PERIOD);
        self.target_ttl = self.target_ttl.max(MIN_TIMER_PERIOD);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_periods_are_zero_then_normalized_raises_them_to_the_floor() {
        let tuning = GameTuning {
            spawn_interval: Duration::ZERO,
            target_ttl: Duration::ZERO,
            hit_linger: Duration::ZERO,
            ..GameTuning::default()
        }
        .normalized();

        assert_eq!(tuning.spawn_interval, MIN_TIMER_PERIOD);
        assert_eq!(tuning.target_ttl, MIN_TIMER_PERIOD);
        assert_eq!(tuning.hit_linger, Duration::ZERO);
    }

    #[test]
    fn when_defaults_are_normalized_then_they_are_unchanged() {
        let tuning = GameTuning::default().normalized();

        assert_eq!(tuning.spawn_interval, Duration::from_secs(2));
        assert_eq!(tuning.target_ttl, Duration::from_secs(3));
    }
}
