/// The game session: status machine, score keeping and the per-frame update
/// that ties player, spawner and collision together.

use log::{debug, info};
use rand::Rng;

use crate::collision::resolve;
use crate::compute::{advance_obstacles, advance_prey};
use crate::consts::START_LIVES;
use crate::entities::{GameEvent, GameStatus, Obstacle, Player, Prey};
use crate::input::{Command, InputState};
use crate::spawner::{Spawned, Spawner};

/// Everything one play-through needs.  Owned by the frame loop and handed
/// by reference to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub status: GameStatus,
    pub score: u32,
    pub lives: i32,
    /// Best score seen since the process started.
    pub high_score: u32,
    /// `None` until the first game starts.
    pub player: Option<Player>,
    pub prey: Vec<Prey>,
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    /// Frames simulated since the last reset.
    pub frame: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session sitting on the title menu with no jaguar yet.
    pub fn new() -> Self {
        GameSession {
            status: GameStatus::Menu,
            score: 0,
            lives: START_LIVES,
            high_score: 0,
            player: None,
            prey: Vec::new(),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            frame: 0,
        }
    }

    /// Start a fresh play-through.  Only the high score survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.player = Some(Player::new());
        self.prey.clear();
        self.obstacles.clear();
        self.spawner = Spawner::new();
        self.frame = 0;
        self.status = GameStatus::Playing;
        info!("new hunt started (high score {})", self.high_score);
    }

    pub fn spawn_rate(&self) -> u32 {
        self.spawner.spawn_rate
    }

    // ── Commands ──────────────────────────────────────────────────────────────

    /// Apply one discrete command.  Commands that mean nothing in the
    /// current status are ignored.  Returns the effect event a successful
    /// pounce produces.
    pub fn handle_command(&mut self, command: Command) -> Option<GameEvent> {
        match (self.status, command) {
            (GameStatus::Menu, Command::Start) | (GameStatus::GameOver, Command::Restart) => {
                self.reset();
                None
            }
            (GameStatus::Playing, Command::Pounce) => {
                let player = self.player.as_mut()?;
                if !player.pounce() {
                    return None;
                }
                debug!("pounce at frame {}", self.frame);
                let (x, y) = player.center();
                Some(GameEvent::Pounce { x, y })
            }
            (GameStatus::Playing, Command::Pause) => {
                self.status = GameStatus::Paused;
                debug!("paused at frame {}", self.frame);
                None
            }
            (GameStatus::Paused, Command::Pause) => {
                self.status = GameStatus::Playing;
                debug!("resumed at frame {}", self.frame);
                None
            }
            _ => None,
        }
    }

    // ── Per-frame update ──────────────────────────────────────────────────────

    /// Simulate one frame.  Does nothing unless a game is being played.
    ///
    /// Order: player, spawn, creature movement, collisions.  Whether prey can
    /// be caught is decided by the pounce state at the start of the frame.
    pub fn update(&mut self, input: &InputState, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }
        let Some(player) = self.player.as_mut() else {
            return Vec::new();
        };

        let pouncing = player.is_pouncing();
        player.update(input);
        self.frame += 1;

        match self.spawner.tick(rng) {
            Some(Spawned::Prey(p)) => self.prey.push(p),
            Some(Spawned::Obstacle(o)) => self.obstacles.push(o),
            None => {}
        }

        advance_prey(&mut self.prey);
        advance_obstacles(&mut self.obstacles);

        let resolution = resolve(
            player,
            pouncing,
            &mut self.prey,
            &mut self.obstacles,
            &mut self.score,
            &mut self.lives,
        );
        let events = resolution.events(player);

        if resolution.life_lost() {
            debug!("hit an obstacle, {} lives left", self.lives);
            if self.lives <= 0 {
                self.game_over();
            }
        }

        events
    }

    fn game_over(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            info!("new high score: {}", self.high_score);
        }
        self.status = GameStatus::GameOver;
        info!("game over after {} frames, score {}", self.frame, self.score);
    }
}
