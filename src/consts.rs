//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 25,
};

/// Width of the playing grid in cells; fixed for the whole session
pub(crate) const GRID_WIDTH: u16 = 20;

/// Height of the playing grid in cells
pub(crate) const GRID_HEIGHT: u16 = 20;

/// Points awarded per cell of a consumed piece
pub(crate) const POINTS_PER_CELL: u32 = 10;

/// Colors that falling pieces are randomly assigned from
pub(crate) const PIECE_COLORS: [Color; 4] =
    [Color::Red, Color::Blue, Color::Yellow, Color::Magenta];

/// Default time between simulation ticks, in milliseconds (10 ticks/second)
pub(crate) const DEFAULT_TICK_PERIOD_MS: u64 = 100;

/// Default snake movement cadence: the snake moves every tick
pub(crate) const DEFAULT_SNAKE_CADENCE: u64 = 1;

/// Default piece descent cadence: pieces descend every tick
pub(crate) const DEFAULT_FALL_CADENCE: u64 = 1;

/// Default number of ticks a piece spends in the warning phase (one second
/// at the default tick period)
pub(crate) const DEFAULT_WARNING_TICKS: u64 = 10;

/// Default per-tick probability of spawning a new piece
pub(crate) const DEFAULT_SPAWN_CHANCE: f64 = 0.05;

/// Default maximum number of active pieces at one time
pub(crate) const DEFAULT_MAX_PIECES: usize = 3;

/// The warning indicator toggles visibility every this many ticks
pub(crate) const WARNING_BLINK_TICKS: u64 = 5;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the cells of a falling (or resting) piece
pub(crate) const PIECE_SYMBOL: char = '▒';

/// Glyph for solidified terrain cells
pub(crate) const TERRAIN_SYMBOL: char = '█';

/// Glyph for the pre-spawn warning indicator
pub(crate) const WARNING_SYMBOL: char = '▼';

/// Glyph for the snake's head when it's collided with something fatal
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the pre-spawn warning indicator
pub(crate) const WARNING_STYLE: Style =
    Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
