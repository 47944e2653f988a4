use super::direction::Direction;
use super::grid::Grid;
use super::piece::{Phase, Piece, Shape};
use super::snake::{MoveResult, Snake};
use crate::config::Tuning;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The whole simulation: grid, snake, active pieces, score, and the tick
/// counter that drives both movement cadences.
///
/// All randomness comes from the injected `rng`, so a seeded generator
/// makes the simulation fully deterministic.
#[derive(Clone, Debug)]
pub(super) struct World<R> {
    rng: R,
    tuning: Tuning,
    pub(super) grid: Grid,
    pub(super) snake: Snake,
    pub(super) pieces: Vec<Piece>,
    pub(super) score: u32,
    pub(super) tick_count: u64,
    pub(super) game_over: bool,
}

impl<R: Rng> World<R> {
    /// Create a fresh world: an empty grid, a one-cell snake at the grid
    /// center facing east, score zero, and a single just-announced piece.
    pub(super) fn new_with_rng(tuning: Tuning, rng: R) -> World<R> {
        let grid = Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT);
        let snake = Snake::new(
            Position::new(grid.width() / 2, grid.height() / 2),
            Direction::East,
        );
        let mut world = World {
            rng,
            tuning,
            grid,
            snake,
            pieces: Vec::new(),
            score: 0,
            tick_count: 0,
            game_over: false,
        };
        world.spawn_piece();
        world
    }

    /// Advance the simulation by one tick.
    ///
    /// The update order is load-bearing: snake movement, then head-vs-
    /// terrain, then piece consumption, then spawning, then piece descent
    /// and solidification.  A finished game no-ops (and the tick counter
    /// stays put) until the world is replaced by a reset.
    pub(super) fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.tick_count += 1;
        if self.tick_count % self.tuning.snake_cadence == 0 {
            if self.snake.advance(self.grid.size()) == MoveResult::Blocked {
                self.game_over = true;
                return;
            }
            if self.grid.is_occupied(self.snake.head()) {
                self.game_over = true;
                return;
            }
        }
        self.consume_pieces();
        if self.pieces.len() < self.tuning.max_pieces
            && self.rng.random_bool(self.tuning.spawn_chance)
        {
            self.spawn_piece();
        }
        if self.tick_count % self.tuning.fall_cadence == 0 {
            self.advance_pieces();
        }
    }

    /// Eat every active piece whose cells contain the snake's head: award
    /// points, schedule growth, and drop the piece.  Each piece can only be
    /// consumed once since it leaves the active set immediately.
    fn consume_pieces(&mut self) {
        let pieces = std::mem::take(&mut self.pieces);
        let mut kept = Vec::with_capacity(pieces.len());
        for piece in pieces {
            if self.snake.collides(&piece) {
                self.score += piece.shape().score();
                self.snake.grow();
            } else {
                kept.push(piece);
            }
        }
        self.pieces = kept;
    }

    /// Announce a new piece with a random shape, color, and column
    fn spawn_piece(&mut self) {
        let shape = Shape::random(&mut self.rng);
        let color = consts::PIECE_COLORS[self.rng.random_range(0..consts::PIECE_COLORS.len())];
        let col = self.rng.random_range(0..=self.grid.width() - shape.width());
        self.pieces
            .push(Piece::new(shape, color, col, self.tick_count));
    }

    /// Advance every active piece one descent step, rebuilding the active
    /// set rather than removing entries mid-iteration.
    ///
    /// A piece whose warning has elapsed enters the grid at row zero and may
    /// immediately take its first descent step in the same tick.  A blocked
    /// piece solidifies if the floor or terrain is in the way; if only the
    /// snake is, it merely rests.
    fn advance_pieces(&mut self) {
        let pieces = std::mem::take(&mut self.pieces);
        let mut active = Vec::with_capacity(pieces.len());
        for mut piece in pieces {
            if piece.phase() == Phase::Warning {
                if self.tick_count - piece.spawn_tick < self.tuning.warning_ticks {
                    active.push(piece);
                    continue;
                }
                piece.start_falling();
            }
            if piece.can_descend(&self.grid, &self.snake) {
                piece.descend();
                active.push(piece);
            } else if piece.blocked_by_floor(&self.grid) || piece.blocked_by_terrain(&self.grid) {
                // Solidified: the cells become permanent terrain and the
                // piece leaves the active set for good.
                for pos in piece.positions() {
                    self.grid.occupy(pos, piece.color());
                }
            } else {
                piece.rest();
                active.push(piece);
            }
        }
        self.pieces = active;
    }
}

impl<R> World<R> {
    /// Change the snake's direction.  Ignored once the game is over.
    pub(super) fn steer(&mut self, direction: Direction) {
        if !self.game_over {
            self.snake.turn(direction);
        }
    }

    pub(super) fn tuning(&self) -> Tuning {
        self.tuning
    }

    pub(super) fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn is_over(&self) -> bool {
        self.game_over
    }

    pub(super) fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
