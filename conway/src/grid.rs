// grid.rs - Dense cell grid with hard (non-wrapping) edges

use std::fmt;

use crate::config::{CanvasConfig, InitialState};
use crate::error::{ConfigError, GridError};
use crate::render::{PixelRect, RenderTarget, Rgb};
use crate::rules::{self, NEIGHBOR_OFFSETS};

/// The Game of Life board.
///
/// Cells are stored row-major in a flat vector, `row * columns + col`. Every
/// coordinate in `[0, columns) x [0, rows)` always has exactly one entry; anything
/// outside that range is treated as dead when counting neighbors and is a
/// programming error when accessed directly.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cell_size: u32,
    cells: Vec<bool>,
    next_cells: Vec<bool>,  // Scratch buffer swapped in by `step`
    generation: u64,
}

impl Grid {
    pub fn new(config: CanvasConfig, initial: InitialState) -> Result<Self, ConfigError> {
        let dims = config.validate()?;

        let cells = (0..dims.rows)
            .flat_map(|row| (0..dims.columns).map(move |col| initial.is_alive(col, row)))
            .collect::<Vec<_>>();

        Ok(Self {
            columns: dims.columns,
            rows: dims.rows,
            cell_size: config.cell_size,
            next_cells: vec![false; cells.len()],
            cells,
            generation: 0,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.columns as u32 * self.cell_size
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.rows as u32 * self.cell_size
    }

    /// Number of generations computed since creation or the last [`Grid::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Flat index of `(col, row)`, or an error when it lies outside the grid.
    pub fn cell_index(&self, col: usize, row: usize) -> Result<usize, GridError> {
        if col < self.columns && row < self.rows {
            Ok(row * self.columns + col)
        } else {
            Err(GridError::OutOfBounds {
                col,
                row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    fn index(&self, col: usize, row: usize) -> usize {
        match self.cell_index(col, row) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    ///
    /// Panics if `(col, row)` is outside the grid.
    pub fn cell_state(&self, col: usize, row: usize) -> bool {
        self.cells[self.index(col, row)]
    }

    /// # Panics
    ///
    /// Panics if `(col, row)` is outside the grid.
    pub fn set_cell_state(&mut self, col: usize, row: usize, alive: bool) {
        let index = self.index(col, row);
        self.cells[index] = alive;
    }

    /// # Panics
    ///
    /// Panics if `(col, row)` is outside the grid.
    pub fn flip_cell_state(&mut self, col: usize, row: usize) {
        let index = self.index(col, row);
        self.cells[index] = !self.cells[index];
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Live cells among the 8 surrounding `(col, row)`; positions off the board count as dead.
    ///
    /// # Panics
    ///
    /// Panics if `(col, row)` itself is outside the grid.
    pub fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        self.index(col, row);
        self.live_neighbors(col, row)
    }

    fn live_neighbors(&self, col: usize, row: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dc, dr)| self.neighbor_alive(col, row, dc, dr))
            .count() as u8
    }

    fn neighbor_alive(&self, col: usize, row: usize, dc: isize, dr: isize) -> bool {
        let (Some(c), Some(r)) = (col.checked_add_signed(dc), row.checked_add_signed(dr)) else {
            return false;
        };
        c < self.columns && r < self.rows && self.cells[r * self.columns + c]
    }

    /// Advance one generation.
    ///
    /// Every next state is computed from the current table into the scratch buffer,
    /// then the two buffers are swapped, so no cell ever sees a partially updated
    /// neighborhood.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let index = row * self.columns + col;
                let next = rules::next_state(self.cells[index], self.live_neighbors(col, row));
                self.next_cells[index] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
    }

    /// Map a canvas pixel position to the cell under it.
    ///
    /// Returns `None` for positions off the canvas (including negative and
    /// non-finite ones), so the result is always safe to pass to the cell accessors.
    pub fn pixel_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }

        let col = (x as u32 / self.cell_size) as usize;
        let row = (y as u32 / self.cell_size) as usize;

        (col < self.columns && row < self.rows).then_some((col, row))
    }

    /// Emit a grey outline for every cell and a white fill on top of the live ones.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        let size = self.cell_size;

        for row in 0..self.rows {
            for col in 0..self.columns {
                let rect = PixelRect::square(col as u32 * size, row as u32 * size, size);

                target.stroke_rect(rect, Rgb::GRID_LINE, 1.0);
                if self.cells[row * self.columns + col] {
                    target.fill_rect(rect, Rgb::WHITE);
                }
            }
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self.cell_size == other.cell_size
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Command, RecordingTarget};

    /// Build a grid with 1 pixel cells from rows of `#` (alive) and `.` (dead).
    fn grid_from(rows: &[&str]) -> Grid {
        let config = CanvasConfig::new(rows[0].len() as u32, rows.len() as u32, 1);
        let mut grid = Grid::new(config, InitialState::Empty).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                grid.set_cell_state(col, row, c == '#');
            }
        }
        grid
    }

    fn empty(columns: u32, rows: u32) -> Grid {
        Grid::new(CanvasConfig::new(columns, rows, 1), InitialState::Empty).unwrap()
    }

    #[test]
    fn default_grid_is_forty_by_forty_and_dead() {
        let grid = Grid::new(CanvasConfig::DEFAULT, InitialState::Empty).unwrap();
        assert_eq!((grid.columns(), grid.rows()), (40, 40));
        assert_eq!((grid.width(), grid.height()), (800, 800));
        assert_eq!(grid.cells().len(), 1600);
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn checkerboard_start() {
        let grid = Grid::new(CanvasConfig::DEFAULT, InitialState::Checkerboard).unwrap();
        assert_eq!(grid.live_cells(), 800);
        assert!(grid.cell_state(0, 0));
        assert!(!grid.cell_state(1, 0));
        assert!(grid.cell_state(39, 39));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Grid::new(CanvasConfig::new(800, 800, 30), InitialState::Empty).unwrap_err();
        assert!(matches!(err, ConfigError::UnevenCellSize { cell_size: 30, .. }));
    }

    #[test]
    fn set_only_touches_one_cell() {
        let mut grid = empty(5, 4);
        grid.set_cell_state(3, 2, true);

        assert!(grid.cell_state(3, 2));
        assert_eq!(grid.live_cells(), 1);

        grid.set_cell_state(3, 2, false);
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn flip_twice_restores() {
        let mut grid = empty(3, 3);
        grid.flip_cell_state(1, 1);
        assert!(grid.cell_state(1, 1));
        grid.flip_cell_state(1, 1);
        assert!(!grid.cell_state(1, 1));
    }

    #[test]
    fn cell_index_reports_out_of_bounds() {
        let grid = empty(4, 3);
        assert_eq!(grid.cell_index(3, 2), Ok(11));
        assert_eq!(
            grid.cell_index(4, 0),
            Err(GridError::OutOfBounds { col: 4, row: 0, columns: 4, rows: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn get_out_of_range_panics() {
        empty(4, 3).cell_state(0, 3);
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn set_out_of_range_panics() {
        empty(4, 3).set_cell_state(4, 0, true);
    }

    #[test]
    #[should_panic(expected = "outside the 4x3 grid")]
    fn neighbors_out_of_range_panics() {
        empty(4, 3).count_live_neighbors(10, 10);
    }

    #[test]
    fn corner_with_three_neighbors() {
        let mut grid = grid_from(&[
            "##...",
            "##...",
            ".....",
        ]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);

        grid.step();
        assert!(grid.cell_state(0, 0));
    }

    #[test]
    fn dead_corner_is_born_with_three_neighbors() {
        let mut grid = grid_from(&[
            ".#...",
            "##...",
            ".....",
        ]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);

        grid.step();
        assert!(grid.cell_state(0, 0));
    }

    #[test]
    fn neighbor_count_range() {
        let full = grid_from(&["###", "###", "###"]);
        assert_eq!(full.count_live_neighbors(1, 1), 8);
        assert_eq!(full.count_live_neighbors(0, 0), 3);
        assert_eq!(full.count_live_neighbors(1, 0), 5);
        assert_eq!(empty(3, 3).count_live_neighbors(1, 1), 0);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = empty(10, 10);
        for _ in 0..20 {
            grid.step();
        }
        assert_eq!(grid.live_cells(), 0);
        assert_eq!(grid.generation(), 20);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut grid = empty(5, 5);
        grid.set_cell_state(2, 2, true);
        grid.step();
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn overcrowded_cell_dies() {
        let mut grid = grid_from(&[
            "###",
            "##.",
            "...",
        ]);
        assert_eq!(grid.count_live_neighbors(1, 1), 4);
        grid.step();
        assert!(!grid.cell_state(1, 1));
    }

    #[test]
    fn block_is_still_life() {
        let mut grid = grid_from(&[
            "......",
            "......",
            "..##..",
            "..##..",
            "......",
            "......",
        ]);
        let before = grid.clone();

        for (col, row) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(grid.count_live_neighbors(col, row), 3);
        }
        for (col, row) in [(1, 2), (4, 3), (2, 1), (3, 4), (1, 1), (4, 4)] {
            assert!(grid.count_live_neighbors(col, row) <= 2);
        }

        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = grid_from(&[
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ]);
        let vertical = grid.clone();

        grid.step();
        insta::assert_snapshot!(grid.to_string(), @r"
        .....
        .....
        .###.
        .....
        .....
        ");

        grid.step();
        assert_eq!(grid, vertical);
    }

    #[test]
    fn glider_dies_against_the_corner() {
        // Non-wrapping edges: a glider heading into the corner never reappears
        let mut grid = grid_from(&[
            ".#....",
            "..#...",
            "###...",
            "......",
            "......",
            "......",
        ]);
        for _ in 0..4 {
            grid.step();
        }
        insta::assert_snapshot!(grid.to_string(), @r"
        ......
        ..#...
        ...#..
        .###..
        ......
        ......
        ");

        for _ in 0..20 {
            grid.step();
        }
        insta::assert_snapshot!(grid.to_string(), @r"
        ......
        ......
        ......
        ......
        ....##
        ....##
        ");
    }

    #[test]
    fn edge_cells_clip_neighbors() {
        // A line along the top edge: the cells above it do not exist
        let mut grid = grid_from(&[
            "###",
            "...",
            "...",
        ]);
        assert_eq!(grid.count_live_neighbors(1, 0), 2);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);

        grid.step();
        insta::assert_snapshot!(grid.to_string(), @r"
        .#.
        .#.
        ...
        ");
    }

    #[test]
    fn step_uses_previous_generation_only() {
        // Updating in place in row order would kill (0, 0) before (0, 1) counts it, leaving nothing
        let mut grid = grid_from(&[
            "##.",
            "...",
            "#..",
        ]);
        grid.step();
        insta::assert_snapshot!(grid.to_string(), @r"
        ...
        ##.
        ...
        ");
    }

    #[test]
    fn clear_resets_generation() {
        let mut grid = grid_from(&["##", "##"]);
        grid.step();
        assert_eq!(grid.generation(), 1);

        grid.clear();
        assert_eq!(grid.live_cells(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn pixel_mapping() {
        let grid = Grid::new(CanvasConfig::DEFAULT, InitialState::Empty).unwrap();

        assert_eq!(grid.pixel_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(grid.pixel_to_cell(19.9, 20.0), Some((0, 1)));
        assert_eq!(grid.pixel_to_cell(799.5, 799.5), Some((39, 39)));
        assert_eq!(grid.pixel_to_cell(800.0, 10.0), None);
        assert_eq!(grid.pixel_to_cell(10.0, 800.0), None);
        assert_eq!(grid.pixel_to_cell(-0.5, 10.0), None);
        assert_eq!(grid.pixel_to_cell(f32::NAN, 10.0), None);
        assert_eq!(grid.pixel_to_cell(10.0, f32::INFINITY), None);
    }

    #[test]
    fn render_outlines_every_cell_and_fills_live_ones() {
        let config = CanvasConfig::new(40, 20, 20);
        let mut grid = Grid::new(config, InitialState::Empty).unwrap();
        grid.set_cell_state(1, 0, true);

        let mut target = RecordingTarget::default();
        grid.render(&mut target);

        assert_eq!(
            target.commands,
            vec![
                Command::Stroke(PixelRect::square(0, 0, 20), Rgb::GRID_LINE, 1.0),
                Command::Stroke(PixelRect::square(20, 0, 20), Rgb::GRID_LINE, 1.0),
                Command::Fill(PixelRect::square(20, 0, 20), Rgb::WHITE),
            ]
        );
    }

    #[test]
    fn render_does_not_mutate() {
        let grid = Grid::new(CanvasConfig::DEFAULT, InitialState::Checkerboard).unwrap();
        let before = grid.clone();

        let mut target = RecordingTarget::default();
        grid.render(&mut target);

        assert_eq!(grid, before);
        assert_eq!(target.strokes(), 1600);
        assert_eq!(target.fills(), 800);
    }
}
