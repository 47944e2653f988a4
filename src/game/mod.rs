mod direction;
mod grid;
mod piece;
mod snake;
mod world;
use self::direction::Direction;
use self::world::World;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Tuning;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The game screen: owns the simulation and paces it with a poll-with-
/// deadline loop, handling keyboard input that arrives between ticks.
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    world: World<R>,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(tuning: Tuning) -> Self {
        Game::new_with_rng(tuning, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(tuning: Tuning, rng: R) -> Game<R> {
        Game {
            world: World::new_with_rng(tuning, rng),
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.world.tuning().tick_period());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.world.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if self.running() {
            match cmd {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.world.steer(Direction::North),
                Command::Left => self.world.steer(Direction::West),
                Command::Down => self.world.steer(Direction::South),
                Command::Right => self.world.steer(Direction::East),
                _ => (),
            }
        } else {
            match cmd {
                Command::R | Command::Space => {
                    return Some(Screen::Game(Game::new(self.world.tuning())))
                }
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            }
        }
        None
    }

    fn running(&self) -> bool {
        !self.world.is_over()
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}", self.world.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = self.world.grid.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        for (pos, color) in self.world.grid.occupied_cells() {
            level.draw_cell(pos, consts::TERRAIN_SYMBOL, Style::new().fg(color));
        }
        let blink_on = (self.world.tick_count() / consts::WARNING_BLINK_TICKS) % 2 == 0;
        for piece in &self.world.pieces {
            if piece.shows_warning() && blink_on {
                level.draw_cell(
                    Position::new(piece.column(), 0),
                    consts::WARNING_SYMBOL,
                    consts::WARNING_STYLE,
                );
            }
        }
        for piece in &self.world.pieces {
            for pos in piece.positions() {
                level.draw_cell(pos, consts::PIECE_SYMBOL, Style::new().fg(piece.color()));
            }
        }
        for &pos in self.world.snake.cells() {
            level.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.world.is_over() {
            level.draw_cell(
                self.world.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(
                self.world.snake.head(),
                self.world.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        if self.world.is_over() {
            Span::from(" — GAME OVER —").render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position { x, y }) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
