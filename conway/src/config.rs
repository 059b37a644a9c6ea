// config.rs - Compile-time canvas geometry and the three editor variants

use crate::error::ConfigError;

/// Frames between automatic generations while autoplay is running.
pub const AUTOPLAY_CADENCE: u64 = 10;

/// Pixel geometry of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

/// Grid dimensions in cells, derived from a validated [`CanvasConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub columns: usize,
    pub rows: usize,
}

impl CanvasConfig {
    /// 800x800 canvas with 20 pixel cells (40x40 grid)
    pub const DEFAULT: CanvasConfig = CanvasConfig {
        width: 800,
        height: 800,
        cell_size: 20,
    };

    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Check that the cell size tiles the canvas exactly and return the cell counts.
    pub fn validate(&self) -> Result<GridDims, ConfigError> {
        let CanvasConfig {
            width,
            height,
            cell_size,
        } = *self;

        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyCanvas { width, height });
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(ConfigError::UnevenCellSize {
                width,
                height,
                cell_size,
            });
        }

        Ok(GridDims {
            columns: (width / cell_size) as usize,
            rows: (height / cell_size) as usize,
        })
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How every cell is filled when the grid is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialState {
    #[default]
    Empty,
    /// Alive where `col + row` is even
    Checkerboard,
}

impl InitialState {
    pub fn is_alive(self, col: usize, row: usize) -> bool {
        match self {
            InitialState::Empty => false,
            InitialState::Checkerboard => (col + row) % 2 == 0,
        }
    }
}

/// The three editor configurations.
///
/// | variant        | start        | pointer               | keys                                     |
/// |----------------|--------------|-----------------------|------------------------------------------|
/// | `Autoplay`     | empty        | hold to paint / erase | space steps, `p` runs/pauses, `c` clears |
/// | `ToggleEditor` | checkerboard | press flips one cell  | none                                     |
/// | `ManualStep`   | empty        | press flips one cell  | any key steps                            |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Autoplay,
    ToggleEditor,
    ManualStep,
}

impl Variant {
    pub fn initial_state(self) -> InitialState {
        match self {
            Variant::ToggleEditor => InitialState::Checkerboard,
            Variant::Autoplay | Variant::ManualStep => InitialState::Empty,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Autoplay => "Conway's Game of Life",
            Variant::ToggleEditor => "Grid Display",
            Variant::ManualStep => "Conway's Game of Life (step)",
        }
    }

    /// Frame rate cap, `None` when the variant only repaints on input.
    pub fn frame_cap(self) -> Option<u32> {
        match self {
            Variant::Autoplay => Some(60),
            Variant::ToggleEditor | Variant::ManualStep => None,
        }
    }
}
