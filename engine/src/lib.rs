//! Platform layer: window, keyboard capture, sprite loading and the
//! fixed-delay tick driver. Games plug in through [`Game`].

pub mod assets;
pub mod context;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;

pub use context::{init_logging, EngineContext, Game, WindowConfig};
pub use error::EngineError;
pub use geometry::Rect;
pub use input::{EventQueue, EventSource, Key, RawEvent};
pub use render::{Canvas, Color, DrawList, Graphics, Sprite, TextureId};
