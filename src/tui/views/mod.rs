// Views module - screen-level rendering
//
// One screen: title, editor with its hint line, the sentence with the
// floating selector, optional logs and the status bar. Modal and toast are
// drawn last so they sit on top.

mod modal;

use super::app::{App, Mode};
use super::layout::Breakpoint;
use crate::tui::components::{
    hint_bar, logs_panel, selector_panel, sentence_panel, status_bar, title_bar,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

/// Main render function, called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    app.frame_area = f.area();
    let bp = Breakpoint::from_width(f.area().width);
    let show_logs = app.show_logs && bp.at_least(Breakpoint::Normal);

    let mut constraints = vec![
        Constraint::Length(3), // title
        Constraint::Length(3), // editor
        Constraint::Length(1), // hint
        Constraint::Min(5),    // sentence
    ];
    if show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2)); // status

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    app.editor
        .render(f, chunks[1], &app.theme, app.mode == Mode::Typing && app.modal.is_none());
    hint_bar::render(f, chunks[2], app);
    sentence_panel::render(f, chunks[3], app);
    if show_logs {
        let area = chunks[4];
        let entries = app.log_buffer.tail(logs_panel::visible_rows(area));
        logs_panel::render(f, area, &entries, &app.theme);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    selector_panel::render(f, app);

    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
