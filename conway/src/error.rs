// error.rs - Error types shared by the grid and its canvas configuration

use thiserror::Error;

/// Setup-time problems with the canvas geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("Canvas {width}x{height} has no area")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Cell size {cell_size} does not evenly divide canvas {width}x{height}")]
    UnevenCellSize {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({col}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
}

/// Failures while starting the windowed editor.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Invalid canvas: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ui(#[from] eframe::Error),
}
