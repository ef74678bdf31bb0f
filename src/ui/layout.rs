use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::counter_display::DISPLAY_HEIGHT;

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Widest the main column gets on large terminals.
pub const MAX_COLUMN_WIDTH: u16 = 64;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Horizontally centered column no wider than `max_width`.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Regions inside the body column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySections {
    pub counter: Rect,
    pub ask: Rect,
    pub fact: Rect,
    pub history: Rect,
}

/// Rows above the fact card: spacer, counter, spacer, ask hint, spacer.
const ROWS_ABOVE_CARD: u16 = DISPLAY_HEIGHT + 4;

/// Width of the body column and the most rows the fact card may take.
pub fn fact_card_bounds(body: Rect) -> (u16, u16) {
    let column = centered_column(body, MAX_COLUMN_WIDTH);
    (column.width, column.height.saturating_sub(ROWS_ABOVE_CARD))
}

pub fn body_sections(body: Rect, fact_height: u16) -> BodySections {
    let column = centered_column(body, MAX_COLUMN_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(fact_height),
            Constraint::Fill(1),
        ])
        .split(column);

    BodySections {
        counter: chunks[1],
        ask: chunks[3],
        fact: chunks[5],
        history: chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let area = Rect::new(0, 0, 80, 40);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(header.height + body.height + footer.height, 40);
        assert_eq!(footer.y, 37);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn column_is_centered_and_capped() {
        let column = centered_column(Rect::new(0, 0, 100, 10), MAX_COLUMN_WIDTH);
        assert_eq!(column.width, MAX_COLUMN_WIDTH);
        assert_eq!(column.x, 18);

        let narrow = centered_column(Rect::new(5, 0, 30, 10), MAX_COLUMN_WIDTH);
        assert_eq!(narrow, Rect::new(5, 0, 30, 10));
    }

    #[test]
    fn hidden_fact_card_gives_rows_to_history() {
        let body = Rect::new(0, 4, 80, 30);
        let with_card = body_sections(body, 6);
        let without_card = body_sections(body, 0);
        assert_eq!(without_card.fact.height, 0);
        assert_eq!(without_card.history.height, with_card.history.height + 6);
        assert_eq!(with_card.counter.height, DISPLAY_HEIGHT);
    }

    #[test]
    fn card_bounds_leave_room_for_counter() {
        let (width, max_rows) = fact_card_bounds(Rect::new(0, 4, 100, 33));
        assert_eq!(width, MAX_COLUMN_WIDTH);
        assert_eq!(max_rows, 33 - DISPLAY_HEIGHT - 4);

        let sections = body_sections(Rect::new(0, 4, 100, 33), max_rows);
        assert_eq!(sections.fact.height, max_rows);
        assert_eq!(sections.counter.height, DISPLAY_HEIGHT);
    }
}
