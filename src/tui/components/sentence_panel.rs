//! Sentence panel - the parsed sentence, one cell block per term
//!
//! Each categorizable term is three rows tall: its category label, the word
//! itself and an underline in the category colour. Separators only draw the
//! middle row. The rects used here are stored back into the app so mouse
//! hit-testing and selector anchoring see exactly what was drawn.

use crate::sentence::Term;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::layout::{self, TERM_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Rozbor ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.sentence.is_empty() {
        let empty = Paragraph::new("Žádná věta. Napište ji do pole výše a stiskněte Enter.")
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(empty, inner);
        app.term_rects.clear();
        return;
    }

    app.term_rects = layout::layout_sentence(app.sentence.terms(), inner);

    let active = app.selector.selected_term();
    let buf = f.buffer_mut();
    for (i, (term, rect)) in app.sentence.terms().iter().zip(&app.term_rects).enumerate() {
        if rect.width == 0 {
            continue;
        }
        draw_term(buf, *rect, term, &app.theme, active == Some(i));
    }
}

fn draw_term(buf: &mut Buffer, rect: Rect, term: &Term, theme: &Theme, active: bool) {
    // Rects are clamped to the panel; text never spills past them
    let width = rect.width as usize;

    let Some(presentation) = term.presentation() else {
        buf.set_stringn(
            rect.x,
            rect.y + 1,
            term.text(),
            width,
            Style::default().fg(theme.foreground),
        );
        return;
    };

    let color = theme.category_color(&presentation.classes);

    if let Some(label) = term.label() {
        buf.set_stringn(
            rect.x,
            rect.y,
            format!("{:^width$}", label),
            width,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }

    let word_style = if active {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };
    buf.set_stringn(
        rect.x,
        rect.y + 1,
        format!("{:^width$}", term.text()),
        width,
        word_style,
    );

    let underline = if term.label().is_some() { "━" } else { "─" };
    buf.set_stringn(
        rect.x,
        rect.y + TERM_HEIGHT - 1,
        underline.repeat(width),
        width,
        Style::default().fg(color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{taxonomy, CategoryId};
    use crate::sentence::Sentence;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn word_wider_than_its_rect_is_cut() {
        let mut sentence = Sentence::parse("nejneobhospodařovávatelnějšími");
        if let Some(term) = sentence.term_mut(0) {
            term.update_category(&taxonomy::czech(), CategoryId(7));
        }
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 3));
        buf[(6, 1)].set_symbol("│");

        draw_term(&mut buf, Rect::new(0, 0, 6, 3), &sentence.terms()[0], &Theme::default(), false);

        assert_eq!(row(&buf, 0), " Pupř       ");
        assert_eq!(row(&buf, 1), "nejneo│     ");
        assert_eq!(row(&buf, 2), "━━━━━━      ");
    }

    #[test]
    fn separator_is_cut_to_its_rect() {
        let sentence = Sentence::parse("Ahoj, světe");
        let separator = &sentence.terms()[1];
        assert_eq!(separator.text(), ",");
        assert!(!separator.is_categorizable());

        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        draw_term(&mut buf, Rect::new(0, 0, 0, 3), separator, &Theme::default(), false);
        assert_eq!(row(&buf, 1), "    ");
    }
}
