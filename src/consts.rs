//! Tuning constants. Everything is in world units (pixels of the reference
//! 1000×700 field) and frames at `FPS`.

pub const FIELD_WIDTH: f32 = 1000.0;
pub const FIELD_HEIGHT: f32 = 700.0;
pub const GROUND_MARGIN_TOP: f32 = 50.0;
pub const GROUND_MARGIN_BOTTOM: f32 = 50.0;

/// Simulation ticks per second.
pub const FPS: u32 = 60;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 6.0;
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = FIELD_HEIGHT / 2.0;

/// Frames a pounce stays active.
pub const POUNCE_DURATION: u32 = 15;
/// Frames from activation until the next pounce is allowed.
pub const POUNCE_COOLDOWN: u32 = 30;

// ── Prey & obstacles ──────────────────────────────────────────────────────────

pub const PREY_SIZE: f32 = 35.0;
pub const PREY_MIN_SPEED: f32 = 2.5;
pub const PREY_MAX_SPEED: f32 = 4.5;
pub const PREY_POINTS: u32 = 10;
pub const PREY_MIN_Y: i32 = 100;
pub const PREY_MAX_Y: i32 = FIELD_HEIGHT as i32 - 100;
pub const PREY_DESPAWN_X: f32 = -50.0;

pub const OBSTACLE_WIDTH: f32 = 50.0;
pub const OBSTACLE_HEIGHT: f32 = 80.0;
pub const OBSTACLE_SPEED: f32 = 3.0;
pub const OBSTACLE_MIN_Y: i32 = 80;
pub const OBSTACLE_MAX_Y: i32 = FIELD_HEIGHT as i32 - 150;
pub const OBSTACLE_DESPAWN_X: f32 = -60.0;

// ── Spawning & difficulty ─────────────────────────────────────────────────────

pub const START_SPAWN_RATE: u32 = 60;
pub const MIN_SPAWN_RATE: u32 = 30;
pub const SPAWN_RATE_STEP: u32 = 2;
pub const DIFFICULTY_INTERVAL: u32 = 300;
pub const PREY_PROBABILITY: f64 = 0.7;

// ── Session ───────────────────────────────────────────────────────────────────

pub const START_LIVES: i32 = 3;
