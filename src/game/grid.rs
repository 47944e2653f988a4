use ratatui::layout::{Position, Rect, Size};
use ratatui::style::Color;

/// The fixed lattice of solidified terrain.
///
/// Cells start empty and are permanently occupied when a falling piece
/// solidifies; there is no removal operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Option<Color>>,
}

impl Grid {
    pub(super) fn new(width: u16, height: u16) -> Grid {
        let cells = vec![None; usize::from(width) * usize::from(height)];
        Grid {
            width,
            height,
            cells,
        }
    }

    pub(super) fn width(&self) -> u16 {
        self.width
    }

    pub(super) fn height(&self) -> u16 {
        self.height
    }

    pub(super) fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height)
            .then(|| usize::from(pos.y) * usize::from(self.width) + usize::from(pos.x))
    }

    /// Whether `pos` holds solidified terrain.  Out-of-bounds positions are
    /// reported as unoccupied.
    pub(super) fn is_occupied(&self, pos: Position) -> bool {
        self.color_at(pos).is_some()
    }

    pub(super) fn color_at(&self, pos: Position) -> Option<Color> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Permanently mark `pos` as terrain of the given color.  Out-of-bounds
    /// positions are ignored.
    pub(super) fn occupy(&mut self, pos: Position, color: Color) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(color);
        }
    }

    /// Iterate over all occupied cells and their colors, row by row
    pub(super) fn occupied_cells(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        Rect::from((Position::ORIGIN, self.size()))
            .positions()
            .filter_map(|pos| self.color_at(pos).map(|color| (pos, color)))
    }
}
