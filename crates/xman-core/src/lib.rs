//! xman-core: Core game logic for the X-Man terminal RPG
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the TUI crate drives a
//! [`GameState`] by feeding it directional ticks and command lines,
//! and renders whatever the state exposes.

pub mod board;
pub mod combat;
pub mod command;
pub mod entity;
pub mod loot;
pub mod shop;
pub mod status;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{GameLoopResult, GameState, Mode, SessionSummary};
pub use rng::GameRng;
