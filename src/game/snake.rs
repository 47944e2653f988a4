use super::direction::Direction;
use super::piece::Piece;
use crate::consts;
use ratatui::layout::{Position, Size};
use std::collections::VecDeque;

/// What happened when the snake tried to move
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MoveResult {
    /// The snake moved forwards
    Continue,
    /// The snake ran into a wall or itself; the caller ends the game
    Blocked,
}

/// Snake state.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake's body, head first.
    /// Never empty, and free of duplicates.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Whether the snake should grow by one cell on its next move
    pub(super) grow: bool,
}

impl Snake {
    /// Create a one-cell snake with its head at `head` and facing in
    /// `direction`.
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            direction,
            grow: false,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self.body.front().expect("snake body should never be empty")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Return the positions of the cells in the snake's body, head first
    pub(super) fn cells(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change the snake's direction to `direction`.  Turning directly back
    /// into the body is rejected as a no-op.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction within
    /// `bounds`.
    ///
    /// Returns [`MoveResult::Blocked`] if the new head would leave the grid
    /// or land on the body.  The tail cell is excluded from the collision
    /// check when it is about to be vacated this move, i.e. when no growth
    /// is pending.  On success the pending-growth flag is consumed: the tail
    /// is kept instead of dropped.
    pub(super) fn advance(&mut self, bounds: Size) -> MoveResult {
        let Some(head) = self.direction.advance(self.head(), bounds) else {
            return MoveResult::Blocked;
        };
        let check_len = self.body.len() - usize::from(!self.grow);
        if self.body.iter().take(check_len).any(|&p| p == head) {
            return MoveResult::Blocked;
        }
        self.body.push_front(head);
        if !self.grow {
            let _ = self.body.pop_back();
        }
        self.grow = false;
        MoveResult::Continue
    }

    /// Schedule the snake to grow by one cell on its next move
    pub(super) fn grow(&mut self) {
        self.grow = true;
    }

    /// Whether the snake's head overlaps one of `piece`'s occupied cells.
    /// Warning-phase pieces occupy no cells and can never collide.
    pub(super) fn collides(&self, piece: &Piece) -> bool {
        let head = self.head();
        piece.positions().any(|p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 20,
        height: 20,
    };

    fn snake_with_body(cells: &[(u16, u16)], direction: Direction) -> Snake {
        Snake {
            body: cells.iter().map(|&(x, y)| Position::new(x, y)).collect(),
            direction,
            grow: false,
        }
    }

    #[test]
    fn advance_east() {
        let mut snake = Snake::new(Position::new(10, 10), Direction::East);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Continue);
        assert_eq!(snake.head(), Position::new(11, 10));
        assert_eq!(snake.body.len(), 1);
    }

    #[test]
    fn advance_into_wall() {
        let mut snake = Snake::new(Position::new(19, 10), Direction::East);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Blocked);
        assert_eq!(snake.head(), Position::new(19, 10));
    }

    #[test]
    fn advance_keeps_length() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::East);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Continue);
        assert_eq!(
            snake.cells().iter().copied().collect::<Vec<_>>(),
            vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5)
            ]
        );
    }

    #[test]
    fn growth_consumed_once() {
        let mut snake = Snake::new(Position::new(10, 10), Direction::East);
        snake.grow();
        assert_eq!(snake.advance(BOUNDS), MoveResult::Continue);
        assert_eq!(snake.body.len(), 2);
        assert!(!snake.grow);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Continue);
        assert_eq!(snake.body.len(), 2);
    }

    #[test]
    fn advance_into_body() {
        // Head at (5,5) with the body curling east & south; turning south
        // runs into (5,6), which is not the tail.
        let mut snake = snake_with_body(
            &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6), (4, 7)],
            Direction::West,
        );
        snake.turn(Direction::South);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Blocked);
    }

    #[test]
    fn advance_into_vacating_tail() {
        // A 2x2 loop: the head may move onto the tail cell because the tail
        // vacates it this same move.
        let mut snake = snake_with_body(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::West);
        snake.turn(Direction::South);
        assert_eq!(snake.advance(BOUNDS), MoveResult::Continue);
        assert_eq!(snake.head(), Position::new(5, 6));
        assert_eq!(snake.body.len(), 4);
    }

    #[test]
    fn advance_into_tail_while_growing() {
        // With growth pending the tail stays put, so the same move is fatal.
        let mut snake = snake_with_body(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::West);
        snake.turn(Direction::South);
        snake.grow();
        assert_eq!(snake.advance(BOUNDS), MoveResult::Blocked);
    }

    #[test]
    fn no_reverse_turn() {
        let mut snake = Snake::new(Position::new(10, 10), Direction::East);
        snake.turn(Direction::West);
        assert_eq!(snake.direction, Direction::East);
        snake.turn(Direction::North);
        assert_eq!(snake.direction, Direction::North);
        snake.turn(Direction::South);
        assert_eq!(snake.direction, Direction::North);
    }
}
