use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`.  If `area` is
/// too small, the returned `Rect` is clipped to fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Return the centered [`DISPLAY_SIZE`][consts::DISPLAY_SIZE] rectangle of
/// `buffer_area` in which everything is drawn.
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Rect::new(0, 0, 120, 45),
        Size::new(80, 25),
        Rect::new(20, 10, 80, 25)
    )]
    #[case(Rect::new(0, 0, 80, 25), Size::new(80, 25), Rect::new(0, 0, 80, 25))]
    #[case(Rect::new(5, 3, 30, 10), Size::new(20, 4), Rect::new(10, 6, 20, 4))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
