//! Sideways - a tiny side-scrolling shooter loop.
//!
//! Core modules:
//! - `input`: held control state built from key events
//! - `actor`, `projectile`: the two kinds of moving rectangles
//! - `simulation`: per-tick world update, fire gate and reaping
//! - `render`: draws the world onto an engine canvas
//! - `main_loop`: plugs all of the above into the engine's tick driver
//! - `tuning`: built-in game constants

pub mod actor;
pub mod input;
pub mod main_loop;
pub mod projectile;
pub mod render;
pub mod simulation;
pub mod tuning;

pub use main_loop::{LoopState, MainLoop};
pub use tuning::Tuning;
