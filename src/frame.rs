/// One tick of the frame loop, kept out of `main` so it can be driven by
/// tests: drain commands, update, hand the result to a renderer.

use std::io;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::consts::FPS;
use crate::entities::GameEvent;
use crate::input::{Command, CommandQueue, InputState};
use crate::session::GameSession;

/// Anything that can show a session.  The terminal front end implements
/// this; tests use a recorder.
pub trait Renderer {
    fn draw(&mut self, session: &GameSession, events: &[GameEvent]) -> io::Result<()>;
}

/// Result of a single tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
    pub quit: bool,
}

/// Run commands then the simulation for one frame.  Rendering is left to
/// the caller so a quit can skip it.
pub fn run_frame(
    session: &mut GameSession,
    input: &InputState,
    commands: &mut CommandQueue,
    rng: &mut impl Rng,
) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();

    for command in commands.drain() {
        if command == Command::Quit {
            outcome.quit = true;
            continue;
        }
        if let Some(event) = session.handle_command(command) {
            outcome.events.push(event);
        }
    }
    if outcome.quit {
        return outcome;
    }

    outcome.events.extend(session.update(input, rng));
    outcome
}

/// Duration of one tick at `FPS`.
pub fn frame_duration() -> Duration {
    Duration::from_secs(1) / FPS
}

/// Sleeps away whatever is left of the current tick.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    started: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        FrameClock {
            frame,
            started: Instant::now(),
        }
    }

    /// Mark the start of a tick.
    pub fn begin(&mut self) {
        self.started = Instant::now();
    }

    /// Time still left in the current tick.
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.started.elapsed())
    }

    pub fn throttle(&self) {
        let left = self.remaining();
        if !left.is_zero() {
            std::thread::sleep(left);
        }
    }
}
