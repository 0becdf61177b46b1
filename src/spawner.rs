/// Timer-driven spawning and the difficulty ramp.
///
/// All randomness comes through the `rng` argument so callers control
/// determinism (tests use a seeded `StdRng`).

use log::{debug, trace};
use rand::Rng;

use crate::consts::{
    DIFFICULTY_INTERVAL, FIELD_WIDTH, MIN_SPAWN_RATE, OBSTACLE_MAX_Y, OBSTACLE_MIN_Y,
    OBSTACLE_SPEED, PREY_MAX_SPEED, PREY_MAX_Y, PREY_MIN_SPEED, PREY_MIN_Y, PREY_PROBABILITY,
    SPAWN_RATE_STEP, START_SPAWN_RATE,
};
use crate::entities::{Obstacle, Prey, PreyKind};

/// What a spawn tick produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Spawned {
    Prey(Prey),
    Obstacle(Obstacle),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawner {
    /// Frames since the last spawn.
    pub spawn_timer: u32,
    /// Frames between spawns; shrinks towards `MIN_SPAWN_RATE`.
    pub spawn_rate: u32,
    /// Frames since the last difficulty step.
    pub difficulty_timer: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Spawner {
            spawn_timer: 0,
            spawn_rate: START_SPAWN_RATE,
            difficulty_timer: 0,
        }
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both timers by one frame.  Returns the spawned entity on
    /// frames where the spawn timer reaches the current rate.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<Spawned> {
        self.spawn_timer += 1;
        let spawned = if self.spawn_timer >= self.spawn_rate {
            self.spawn_timer = 0;
            Some(spawn_one(rng))
        } else {
            None
        };

        self.difficulty_timer += 1;
        if self.difficulty_timer >= DIFFICULTY_INTERVAL {
            self.difficulty_timer = 0;
            let next = self
                .spawn_rate
                .saturating_sub(SPAWN_RATE_STEP)
                .max(MIN_SPAWN_RATE);
            if next != self.spawn_rate {
                debug!("difficulty up: spawn rate {} -> {}", self.spawn_rate, next);
            }
            self.spawn_rate = next;
        }

        spawned
    }
}

/// Roll one new entity at the right edge of the field.
pub fn spawn_one(rng: &mut impl Rng) -> Spawned {
    if rng.gen_bool(PREY_PROBABILITY) {
        let kind = PreyKind::ALL[rng.gen_range(0..PreyKind::ALL.len())];
        let prey = Prey {
            x: FIELD_WIDTH,
            y: rng.gen_range(PREY_MIN_Y..=PREY_MAX_Y) as f32,
            kind,
            speed: rng.gen_range(PREY_MIN_SPEED..PREY_MAX_SPEED),
        };
        trace!("spawned {:?} at y={} speed={:.2}", prey.kind, prey.y, prey.speed);
        Spawned::Prey(prey)
    } else {
        let obstacle = Obstacle {
            x: FIELD_WIDTH,
            y: rng.gen_range(OBSTACLE_MIN_Y..=OBSTACLE_MAX_Y) as f32,
            speed: OBSTACLE_SPEED,
        };
        trace!("spawned obstacle at y={}", obstacle.y);
        Spawned::Obstacle(obstacle)
    }
}
