//! Logs panel component
//!
//! Shows the most recent system log entries that fit in the panel, colour
//! coded by level and prefixed with the emitting module.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Systémový log "),
    );

    f.render_widget(list, area);
}

/// Rows available for entries inside the border
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.target,
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.warn),
        LogLevel::Info => Style::default().fg(theme.info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.debug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn entry_format_has_time_level_and_message() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            level: LogLevel::Info,
            target: "rozbor::tui::app".to_string(),
            message: "Nová věta".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "[09:05:07] INFO  rozbor::tui::app: Nová věta");
    }

    #[test]
    fn visible_rows_excludes_border() {
        assert_eq!(visible_rows(Rect::new(0, 0, 40, 6)), 4);
        assert_eq!(visible_rows(Rect::new(0, 0, 40, 1)), 0);
    }
}
