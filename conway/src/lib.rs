// lib.rs - Conway's Game of Life with an interactive cell editor

pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod render;
pub mod rules;
pub mod ui;

pub use config::{AUTOPLAY_CADENCE, CanvasConfig, GridDims, InitialState, Variant};
pub use error::{ConfigError, GridError, RunError};
pub use grid::Grid;
pub use interaction::{Brush, Flow, FrameInput, InputEvent, InteractionLoop, Key, PointerButton, RunMode};
pub use render::{PixelRect, RenderTarget, Rgb};
