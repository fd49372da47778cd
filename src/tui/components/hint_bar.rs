// Hint bar component
//
// One line under the editor showing whichever typing hint is visible.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(hint) = app.hints.visible() else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(" 💡 ", Style::default().fg(app.theme.highlight)),
        Span::styled(
            hint.text(),
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
