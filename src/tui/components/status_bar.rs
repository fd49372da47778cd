// Status bar component
//
// Mode, categorization progress and key hints for the focused part of the UI.

use crate::tui::app::{App, Mode};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CATEGORIZING_KEYS: &str = "←/→:slovo  Mezera:vybrat  ↑/↓ Enter:kategorie  y:kopírovat  Ctrl+N:nová věta";
const CATEGORIZING_KEYS_SHORT: &str = "←/→ Mezera ↑/↓ Enter y";

/// Adapts to terminal width: narrow terminals get the short key list
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let keys = match app.mode {
        Mode::Typing => app.editor.focus_hint().unwrap_or_default(),
        Mode::Categorizing if bp.at_least(Breakpoint::Wide) => CATEGORIZING_KEYS,
        Mode::Categorizing => CATEGORIZING_KEYS_SHORT,
    };

    let status_text = match app.mode {
        Mode::Typing => format!(" {} │ {}", app.mode.name(), keys),
        Mode::Categorizing => {
            let (done, total) = app.sentence.progress();
            if bp.at_least(Breakpoint::Normal) {
                format!(" {} │ ✔ {}/{} │ {}", app.mode.name(), done, total, keys)
            } else {
                format!(" ✔ {}/{} │ {}", done, total, keys)
            }
        }
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
