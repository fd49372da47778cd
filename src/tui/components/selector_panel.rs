//! Selector panel - floating list of categories under the active term
//!
//! Draws only the rows the selector reports as visible, so a click on a cell
//! lands on the option drawn there even when the list is scrolled.

use crate::tui::app::App;
use crate::tui::selector::{header_line, option_line, SelectorRow};
use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Draw the selector where it was last positioned. Hidden while idle.
pub fn render(f: &mut Frame, app: &App) {
    let Some(area) = app.selector.area() else {
        return;
    };
    let area = area.intersection(f.area());
    if area.is_empty() {
        return;
    }

    let theme = &app.theme;
    let selector = &app.selector;
    let visible = selector.visible_rows();

    let items: Vec<ListItem> = visible
        .iter()
        .map(|row| match *row {
            SelectorRow::Header(group) => ListItem::new(header_line(
                selector.group_name(group).unwrap_or_default(),
            ))
            .style(
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::BOLD),
            ),
            SelectorRow::Option(index) => {
                let option = &selector.options()[index];
                let color = theme.category_color(&option.classes);
                ListItem::new(option_line(option)).style(Style::default().fg(color))
            }
        })
        .collect();

    let title = if selector.state().is_locked() {
        " Kategorie 🔒 "
    } else {
        " Kategorie "
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.highlight))
                .style(Style::default().bg(theme.background))
                .title(title)
                .title_bottom(Line::from(" Enter/číslo: zařadit  Esc: zrušit ").centered()),
        )
        .highlight_style(
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        );

    // Items already start at the selector's offset; the list itself must not scroll
    let cursor = visible
        .iter()
        .position(|row| *row == SelectorRow::Option(selector.cursor()));
    let mut state = ListState::default().with_selected(cursor);
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    fn row_text(terminal: &Terminal<TestBackend>, area: Rect, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (area.x + 1..area.right() - 1)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn scrolled_list_draws_what_clicks_hit() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).expect("test terminal");
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.selector
            .term_clicked(0, Rect::new(10, 0, 6, 3), Rect::new(0, 0, 80, 12));
        for _ in 0..13 {
            app.selector.cursor_down();
        }

        terminal.draw(|f| render(f, &app)).expect("draw");
        let area = app.selector.area().unwrap_or_default();

        assert!(row_text(&terminal, area, area.y + 1).contains("Puz"));
        assert_eq!(app.selector.option_at(area.x + 1, area.y + 1), Some(6));
        assert!(row_text(&terminal, area, area.y + 4).contains("Přívlastek"));
        assert!(row_text(&terminal, area, area.y + 10).contains("Osl"));
    }

    #[test]
    fn headers_are_drawn_between_groups() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.selector
            .term_clicked(0, Rect::new(10, 0, 6, 3), Rect::new(0, 0, 80, 30));

        terminal.draw(|f| render(f, &app)).expect("draw");
        let area = app.selector.area().unwrap_or_default();

        assert!(row_text(&terminal, area, area.y + 4).contains("Pt"));
        assert!(row_text(&terminal, area, area.y + 5).contains("── Příslovečné určení ──"));
        assert!(row_text(&terminal, area, area.y + 15).contains("── Ostatní ──"));
    }
}
