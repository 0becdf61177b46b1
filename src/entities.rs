/// All game entity types — pure data, no game logic.

use crate::consts::{
    OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, PREY_POINTS, PREY_SIZE,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in world units. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict intersection: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PounceState {
    Ready,
    /// Catching prey is possible.
    Active,
    /// Pounce spent; waiting for the cooldown counter to reach zero.
    Cooldown,
}

/// Prey species. Only the renderer cares which one it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreyKind {
    Rabbit,
    Deer,
    Monkey,
}

impl PreyKind {
    pub const ALL: [PreyKind; 3] = [PreyKind::Rabbit, PreyKind::Deer, PreyKind::Monkey];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
}

// ── Player, prey & obstacles ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub facing: Facing,
    /// Frames of pounce left; non-zero means the pounce is active.
    pub pounce_timer: u32,
    /// Frames until the next pounce is allowed.
    pub pounce_cooldown: u32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prey {
    pub x: f32,
    pub y: f32,
    pub kind: PreyKind,
    /// Leftward speed in units per frame.
    pub speed: f32,
}

impl Prey {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PREY_SIZE, PREY_SIZE)
    }

    pub fn points(&self) -> u32 {
        PREY_POINTS
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

// ── Effect events ─────────────────────────────────────────────────────────────

/// One-shot events for the renderer. The core never draws anything itself.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// Pounce activated; position is the player's centre.
    Pounce { x: f32, y: f32 },
    /// Prey caught; position is the prey's centre.
    Catch { x: f32, y: f32, kind: PreyKind },
    /// Player ran into at least one obstacle this frame.
    Hit { x: f32, y: f32 },
}
