/// Per-frame movement rules for the player and the creatures crossing the
/// field.  Spawning lives in `spawner`, overlap handling in `collision`.

use crate::consts::{
    FIELD_HEIGHT, FIELD_WIDTH, GROUND_MARGIN_BOTTOM, GROUND_MARGIN_TOP, OBSTACLE_DESPAWN_X,
    PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, POUNCE_COOLDOWN,
    POUNCE_DURATION, PREY_DESPAWN_X,
};
use crate::entities::{Facing, Obstacle, PounceState, Prey, Player};
use crate::input::InputState;

// ── Playfield bounds ──────────────────────────────────────────────────────────

pub const PLAYER_MIN_X: f32 = 0.0;
pub const PLAYER_MAX_X: f32 = FIELD_WIDTH - PLAYER_WIDTH;
pub const PLAYER_MIN_Y: f32 = GROUND_MARGIN_TOP;
pub const PLAYER_MAX_Y: f32 = FIELD_HEIGHT - PLAYER_HEIGHT - GROUND_MARGIN_BOTTOM;

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    /// A fresh jaguar at the left edge, vertically centred, facing right.
    pub fn new() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            speed: PLAYER_SPEED,
            facing: Facing::Right,
            pounce_timer: 0,
            pounce_cooldown: 0,
        }
    }

    /// Advance one frame: move by the held directions, clamp into the
    /// playfield, then run the pounce timers down.
    ///
    /// Right overrides left and down overrides up when both are held.
    /// Diagonals are not normalised.
    pub fn update(&mut self, input: &InputState) {
        let mut dx = 0.0;
        let mut dy = 0.0;

        if input.left {
            dx = -self.speed;
            self.facing = Facing::Left;
        }
        if input.right {
            dx = self.speed;
            self.facing = Facing::Right;
        }
        if input.up {
            dy = -self.speed;
        }
        if input.down {
            dy = self.speed;
        }

        self.x = (self.x + dx).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.y = (self.y + dy).clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);

        self.pounce_cooldown = self.pounce_cooldown.saturating_sub(1);
        self.pounce_timer = self.pounce_timer.saturating_sub(1);
    }

    /// Try to start a pounce.  Returns `false` (and changes nothing) unless
    /// the pounce is ready.
    pub fn pounce(&mut self) -> bool {
        if self.pounce_state() != PounceState::Ready {
            return false;
        }
        self.pounce_timer = POUNCE_DURATION;
        self.pounce_cooldown = POUNCE_COOLDOWN;
        true
    }

    pub fn pounce_state(&self) -> PounceState {
        if self.pounce_timer > 0 {
            PounceState::Active
        } else if self.pounce_cooldown > 0 {
            PounceState::Cooldown
        } else {
            PounceState::Ready
        }
    }

    pub fn is_pouncing(&self) -> bool {
        self.pounce_state() == PounceState::Active
    }

    /// How far the cooldown has recovered, 0.0 right after a pounce up to
    /// 1.0 when ready.  Drives the HUD gauge.
    pub fn cooldown_fraction(&self) -> f32 {
        1.0 - self.pounce_cooldown as f32 / POUNCE_COOLDOWN as f32
    }

    pub fn center(&self) -> (f32, f32) {
        self.rect().center()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

// ── Creatures ─────────────────────────────────────────────────────────────────

/// Move every prey left by its own speed and drop the ones that ran off
/// the left edge.
pub fn advance_prey(prey: &mut Vec<Prey>) {
    for p in prey.iter_mut() {
        p.x -= p.speed;
    }
    prey.retain(|p| p.x >= PREY_DESPAWN_X);
}

/// Same as `advance_prey` for obstacles, which scroll a little further out
/// before being discarded.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>) {
    for o in obstacles.iter_mut() {
        o.x -= o.speed;
    }
    obstacles.retain(|o| o.x >= OBSTACLE_DESPAWN_X);
}
