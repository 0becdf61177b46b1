use std::io;
use std::time::Duration;

use jaguar_hunt::entities::{GameEvent, GameStatus};
use jaguar_hunt::frame::{frame_duration, FrameClock};
use jaguar_hunt::{run_frame, Command, CommandQueue, GameSession, InputState, Renderer};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Remembers what it was asked to draw.
#[derive(Default)]
struct Recorder {
    frames: Vec<(GameStatus, Vec<GameEvent>)>,
}

impl Renderer for Recorder {
    fn draw(&mut self, session: &GameSession, events: &[GameEvent]) -> io::Result<()> {
        self.frames.push((session.status, events.to_vec()));
        Ok(())
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn command_queue_drains_in_order() {
    let mut q = CommandQueue::new();
    q.push(Command::Start);
    q.push(Command::Pounce);
    assert_eq!(q.len(), 2);
    let drained: Vec<_> = q.drain().collect();
    assert_eq!(drained, vec![Command::Start, Command::Pounce]);
    assert!(q.is_empty());
}

#[test]
fn start_then_tick() {
    let mut session = GameSession::new();
    let mut commands = CommandQueue::new();
    commands.push(Command::Start);

    let outcome = run_frame(&mut session, &InputState::default(), &mut commands, &mut seeded_rng());
    assert!(!outcome.quit);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.frame, 1);
    assert!(commands.is_empty());
}

#[test]
fn pounce_event_reaches_renderer() {
    let mut session = GameSession::new();
    let mut commands = CommandQueue::new();
    let mut rng = seeded_rng();
    let mut renderer = Recorder::default();

    commands.push(Command::Start);
    let outcome = run_frame(&mut session, &InputState::default(), &mut commands, &mut rng);
    renderer.draw(&session, &outcome.events).unwrap();

    commands.push(Command::Pounce);
    let outcome = run_frame(&mut session, &InputState::default(), &mut commands, &mut rng);
    renderer.draw(&session, &outcome.events).unwrap();

    assert_eq!(renderer.frames.len(), 2);
    assert!(renderer.frames[0].1.is_empty());
    assert!(matches!(renderer.frames[1].1.as_slice(), [GameEvent::Pounce { .. }]));
}

#[test]
fn quit_skips_the_update() {
    let mut session = GameSession::new();
    let mut commands = CommandQueue::new();
    commands.push(Command::Start);
    commands.push(Command::Quit);

    let outcome = run_frame(&mut session, &InputState::default(), &mut commands, &mut seeded_rng());
    assert!(outcome.quit);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.frame, 0);
}

#[test]
fn quit_works_from_every_status() {
    for status in [GameStatus::Menu, GameStatus::Paused, GameStatus::GameOver] {
        let mut session = GameSession::new();
        session.status = status;
        let mut commands = CommandQueue::new();
        commands.push(Command::Quit);
        let outcome = run_frame(&mut session, &InputState::default(), &mut commands, &mut seeded_rng());
        assert!(outcome.quit);
        assert_eq!(session.status, status);
    }
}

#[test]
fn menu_ticks_change_nothing() {
    let mut session = GameSession::new();
    let before = session.clone();
    let mut commands = CommandQueue::new();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        let outcome = run_frame(&mut session, &InputState { left: true, ..Default::default() }, &mut commands, &mut rng);
        assert!(outcome.events.is_empty());
    }
    assert_eq!(session, before);
}

#[test]
fn frame_clock_runs_at_sixty_hz() {
    assert_eq!(frame_duration(), Duration::from_nanos(16_666_666));
    let mut clock = FrameClock::new(frame_duration());
    clock.begin();
    assert!(clock.remaining() <= frame_duration());
}
