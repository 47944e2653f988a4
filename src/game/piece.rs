use super::grid::Grid;
use super::snake::Snake;
use crate::consts;
use enum_map::Enum;
use rand::Rng;
use ratatui::layout::Position;
use ratatui::style::Color;

/// The seven canonical tetromino shapes
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum Shape {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl Shape {
    /// Cell offsets relative to the piece origin, `(dx, dy)` with y growing
    /// downwards
    pub(super) fn cells(self) -> &'static [(u16, u16)] {
        match self {
            Shape::I => &[(0, 0), (0, 1), (0, 2), (0, 3)],
            Shape::O => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Shape::T => &[(0, 0), (1, 0), (2, 0), (1, 1)],
            Shape::L => &[(0, 0), (0, 1), (0, 2), (1, 2)],
            Shape::J => &[(1, 0), (1, 1), (1, 2), (0, 2)],
            Shape::S => &[(1, 0), (2, 0), (0, 1), (1, 1)],
            Shape::Z => &[(0, 0), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Number of columns the shape spans
    pub(super) fn width(self) -> u16 {
        self.cells()
            .iter()
            .map(|&(dx, _)| dx)
            .max()
            .map_or(1, |dx| dx + 1)
    }

    /// Points awarded for eating a piece of this shape
    pub(super) fn score(self) -> u32 {
        let cells =
            u32::try_from(self.cells().len()).expect("shape cell count should fit in u32");
        cells * consts::POINTS_PER_CELL
    }

    pub(super) fn random<R: Rng>(rng: &mut R) -> Shape {
        Shape::from_usize(rng.random_range(0..Shape::LENGTH))
    }
}

/// Lifecycle phase of an active piece.
///
/// Solidification has no phase of its own: a solidified piece is written
/// into the [`Grid`] and removed from the active set in the same step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Phase {
    /// Announced but not yet on the grid; occupies no cells and cannot
    /// collide with anything
    Warning,
    /// Descending through the grid
    Falling,
    /// Descent blocked only by the snake's body; resumes falling once the
    /// snake vacates
    Resting,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Piece {
    pub(super) shape: Shape,
    pub(super) color: Color,

    /// Column of the piece origin; doubles as the warning indicator column
    /// before the piece starts falling
    pub(super) col: u16,

    /// Row of the piece origin; meaningless until the piece leaves the
    /// warning phase
    pub(super) row: u16,

    pub(super) phase: Phase,

    /// Tick at which the piece was spawned; the warning phase ends once
    /// `warning_ticks` have elapsed since then
    pub(super) spawn_tick: u64,
}

impl Piece {
    /// Spawn a piece in the warning phase above the given column
    pub(super) fn new(shape: Shape, color: Color, col: u16, spawn_tick: u64) -> Piece {
        Piece {
            shape,
            color,
            col,
            row: 0,
            phase: Phase::Warning,
            spawn_tick,
        }
    }

    pub(super) fn shape(&self) -> Shape {
        self.shape
    }

    pub(super) fn color(&self) -> Color {
        self.color
    }

    pub(super) fn column(&self) -> u16 {
        self.col
    }

    pub(super) fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the presentation layer should draw this piece's pre-spawn
    /// warning indicator (blink cadence is the renderer's concern)
    pub(super) fn shows_warning(&self) -> bool {
        self.phase == Phase::Warning
    }

    /// The grid cells the piece currently occupies.  Computed lazily from
    /// the origin, which changes every descent; empty while the piece is in
    /// the warning phase.
    pub(super) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let origin = (self.phase != Phase::Warning).then_some((self.col, self.row));
        origin.into_iter().flat_map(move |(x, y)| {
            self.shape
                .cells()
                .iter()
                .map(move |&(dx, dy)| Position::new(x + dx, y + dy))
        })
    }

    /// Whether every cell of the piece can move down one row without hitting
    /// the floor, terrain, or the snake's body
    pub(super) fn can_descend(&self, grid: &Grid, snake: &Snake) -> bool {
        self.positions().all(|p| {
            let below = Position::new(p.x, p.y + 1);
            below.y < grid.height() && !grid.is_occupied(below) && !snake.occupies(below)
        })
    }

    /// Whether any cell of the piece sits directly on the bottom boundary
    pub(super) fn blocked_by_floor(&self, grid: &Grid) -> bool {
        self.positions().any(|p| p.y + 1 >= grid.height())
    }

    /// Whether any cell of the piece sits directly on solidified terrain
    pub(super) fn blocked_by_terrain(&self, grid: &Grid) -> bool {
        self.positions()
            .any(|p| grid.is_occupied(Position::new(p.x, p.y + 1)))
    }

    /// End the warning phase and enter the grid at the top row
    pub(super) fn start_falling(&mut self) {
        self.phase = Phase::Falling;
        self.row = 0;
    }

    /// Move the piece origin down one row
    pub(super) fn descend(&mut self) {
        self.phase = Phase::Falling;
        self.row += 1;
    }

    /// Mark the piece as resting on the snake; its position is unchanged
    pub(super) fn rest(&mut self) {
        self.phase = Phase::Resting;
    }
}
