use crate::counter::CounterAction;
use crate::history::HistoryEntry;
use crate::ui::theme::{
    DOT_DECREASE, DOT_INCREASE, DOT_RESET, GLOBAL_BORDER, HEADER_TEXT, SUBTLE_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::SystemTime;

pub fn action_label(action: CounterAction) -> &'static str {
    match action {
        CounterAction::Increment => "Increased",
        CounterAction::Decrement => "Decreased",
        CounterAction::Reset => "Reset",
    }
}

fn action_color(action: CounterAction) -> Color {
    match action {
        CounterAction::Increment => DOT_INCREASE,
        CounterAction::Decrement => DOT_DECREASE,
        CounterAction::Reset => DOT_RESET,
    }
}

/// One line per entry: dot, label, value, local time.
pub fn history_lines<'a>(
    entries: impl Iterator<Item = &'a HistoryEntry>,
    inner_width: usize,
) -> Vec<Line<'static>> {
    entries
        .map(|entry| {
            let label = format!("{:<10}", action_label(entry.action));
            let value = format!("→ {}", entry.value);
            let time = format_time(entry.timestamp);
            let used = 3 + label.chars().count() + value.chars().count() + time.len() + 1;
            let padding = inner_width.saturating_sub(used).max(1);
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(action_color(entry.action))),
                Span::styled(label, Style::default().fg(HEADER_TEXT)),
                Span::styled(value, Style::default().fg(SUBTLE_TEXT)),
                Span::raw(" ".repeat(padding)),
                Span::styled(time, Style::default().fg(SUBTLE_TEXT)),
                Span::raw(" "),
            ])
        })
        .collect()
}

pub fn render_history<'a>(
    frame: &mut Frame,
    area: Rect,
    entries: impl ExactSizeIterator<Item = &'a HistoryEntry>,
) {
    if entries.len() == 0 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            " Recent History ",
            Style::default()
                .fg(SUBTLE_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(" c: clear ", Style::default().fg(SUBTLE_TEXT)))
                .alignment(Alignment::Right),
        )
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let inner = block.inner(area);
    let lines = history_lines(entries, inner.width as usize);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Format as local `HH:MM:SS`.
pub fn format_time(timestamp: SystemTime) -> String {
    let duration = timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let local_secs = (secs as i64 + local_offset_secs()).rem_euclid(86400) as u64;
    let h = local_secs / 3600;
    let m = (local_secs / 60) % 60;
    let s = local_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Local timezone offset from UTC in seconds.
fn local_offset_secs() -> i64 {
    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;
        // SAFETY: localtime_r only writes into the provided tm.
        unsafe {
            let now = libc::time(std::ptr::null_mut());
            let mut tm = MaybeUninit::<libc::tm>::uninit();
            if libc::localtime_r(&now, tm.as_mut_ptr()).is_null() {
                return 0;
            }
            (*tm.as_ptr()).tm_gmtoff as i64
        }
    }
    #[cfg(not(unix))]
    {
        0
    }
}
