//! Large block-digit rendering of the current count.

use crate::ui::theme::{COUNT_PULSE, COUNT_TEXT, SUBTLE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const GLYPH_ROWS: usize = 5;

/// Rows used by the display: glyphs, a spacer and the label.
pub const DISPLAY_HEIGHT: u16 = GLYPH_ROWS as u16 + 2;

const LABEL: &str = "CURRENT COUNT";

fn glyph(ch: char) -> [&'static str; GLYPH_ROWS] {
    match ch {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => ["## ", " # ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        '-' => ["   ", "   ", "###", "   ", "   "],
        _ => ["   "; GLYPH_ROWS],
    }
}

/// Render `value` as rows of block characters, each glyph cell doubled
/// horizontally and glyphs separated by one column.
pub fn big_digit_lines(value: i64) -> Vec<String> {
    let text = value.to_string();
    (0..GLYPH_ROWS)
        .map(|row| {
            text.chars()
                .map(|ch| {
                    glyph(ch)[row]
                        .chars()
                        .map(|cell| if cell == '#' { "██" } else { "  " })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn render_counter(frame: &mut Frame, area: Rect, count: i64, pulsing: bool) {
    let color = if pulsing { COUNT_PULSE } else { COUNT_TEXT };
    let count_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let label_style = Style::default()
        .fg(SUBTLE_TEXT)
        .add_modifier(Modifier::BOLD);

    let digits = big_digit_lines(count);
    let digits_width = digits.first().map(|l| l.chars().count()).unwrap_or(0);
    let fits = area.height >= DISPLAY_HEIGHT && digits_width <= area.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(DISPLAY_HEIGHT as usize);
    if fits {
        lines.extend(digits.into_iter().map(|row| Line::from(Span::styled(row, count_style))));
    } else {
        lines.push(Line::from(Span::styled(count.to_string(), count_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(LABEL, label_style)));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
