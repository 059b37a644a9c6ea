// interaction.rs - Per-frame input handling, stepping and drawing for every variant

use tracing::{debug, info, trace};

use crate::config::{AUTOPLAY_CADENCE, CanvasConfig, Variant};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::render::{RenderTarget, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    P,
    C,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Discrete input that arrived since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Button press at a canvas pixel position
    PointerDown(PointerButton, (f32, f32)),
    PointerUp(PointerButton),
}

/// Everything the input source reports for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in canvas pixels, `None` when the pointer is not over the window
    pub pointer: Option<(f32, f32)>,
    pub events: Vec<InputEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Paused,
    Running,
}

impl RunMode {
    pub fn toggled(self) -> Self {
        match self {
            RunMode::Paused => RunMode::Running,
            RunMode::Running => RunMode::Paused,
        }
    }
}

/// What a held pointer button does to the cells it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Paint,
    Erase,
}

impl Brush {
    fn alive(self) -> bool {
        matches!(self, Brush::Paint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the grid and drives it from input, one frame at a time.
pub struct InteractionLoop {
    grid: Grid,
    variant: Variant,
    mode: RunMode,
    brush: Option<Brush>,
    frame_count: u64,
}

impl InteractionLoop {
    pub fn new(variant: Variant, config: CanvasConfig) -> Result<Self, ConfigError> {
        let grid = Grid::new(config, variant.initial_state())?;

        info!(
            ?variant,
            columns = grid.columns(),
            rows = grid.rows(),
            cell_size = grid.cell_size(),
            "created grid"
        );

        Ok(Self {
            grid,
            variant,
            mode: RunMode::Paused,
            brush: None,
            frame_count: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn brush(&self) -> Option<Brush> {
        self.brush
    }

    /// Frames processed so far, including the one in progress.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one iteration: apply input, maybe step, then draw the grid onto `target`.
    ///
    /// A quit event returns [`Flow::Quit`] straight away and nothing is drawn.
    pub fn frame<T: RenderTarget + ?Sized>(&mut self, input: &FrameInput, target: &mut T) -> Flow {
        self.frame_count += 1;

        for &event in &input.events {
            if self.handle_event(event) == Flow::Quit {
                info!(frame = self.frame_count, "quit requested");
                return Flow::Quit;
            }
        }

        target.clear(Rgb::BLACK);

        if self.mode == RunMode::Running && self.frame_count % AUTOPLAY_CADENCE == 0 {
            self.advance();
        }

        if let Some(brush) = self.brush {
            if let Some((col, row)) = self.cell_under(input.pointer) {
                self.grid.set_cell_state(col, row, brush.alive());
            }
        }

        self.grid.render(target);
        Flow::Continue
    }

    fn handle_event(&mut self, event: InputEvent) -> Flow {
        use InputEvent::*;

        match (self.variant, event) {
            (_, Quit) => return Flow::Quit,

            // Autoplay: hold to paint/erase, space steps, `p` runs or pauses, `c` clears
            (Variant::Autoplay, KeyDown(Key::Space)) => self.advance(),
            (Variant::Autoplay, KeyDown(Key::P)) => {
                self.mode = self.mode.toggled();
                info!(mode = ?self.mode, "autoplay toggled");
            }
            (Variant::Autoplay, KeyDown(Key::C)) => {
                self.mode = RunMode::Paused;
                self.grid.clear();
                info!("grid cleared");
            }
            (Variant::Autoplay, PointerDown(PointerButton::Primary, _)) => {
                self.brush = Some(Brush::Paint);
            }
            (Variant::Autoplay, PointerDown(PointerButton::Secondary, _)) => {
                self.brush = Some(Brush::Erase);
            }
            (Variant::Autoplay, PointerUp(_)) => self.brush = None,

            // Toggle editors: one flip per press
            (Variant::ToggleEditor | Variant::ManualStep, PointerDown(PointerButton::Primary, pos)) => {
                if let Some((col, row)) = self.cell_under(Some(pos)) {
                    self.grid.flip_cell_state(col, row);
                    trace!(col, row, alive = self.grid.cell_state(col, row), "flipped cell");
                }
            }
            (Variant::ManualStep, KeyDown(_)) => self.advance(),

            _ => {}
        }

        Flow::Continue
    }

    fn cell_under(&self, pointer: Option<(f32, f32)>) -> Option<(usize, usize)> {
        let (x, y) = pointer?;
        let cell = self.grid.pixel_to_cell(x, y);
        if cell.is_none() {
            trace!(x, y, "pointer outside the grid");
        }
        cell
    }

    fn advance(&mut self) {
        self.grid.step();
        debug!(
            generation = self.grid.generation(),
            live = self.grid.live_cells(),
            "advanced generation"
        );
    }
}
