//! Jaguar Hunt: prowl the clearing, pounce on prey, dodge the trees.
//!
//! The library holds the whole simulation; the binary only turns terminal
//! events into input and draws whatever the session looks like.

pub mod collision;
pub mod compute;
pub mod consts;
pub mod entities;
pub mod frame;
pub mod input;
pub mod session;
pub mod spawner;

pub use entities::GameEvent;
pub use frame::{run_frame, FrameOutcome, Renderer};
pub use input::{Command, CommandQueue, InputState};
pub use session::GameSession;
