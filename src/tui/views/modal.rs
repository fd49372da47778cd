// Modal overlay rendering

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Psaní", header_style)),
        kb("Enter", "Rozdělit větu na slova"),
        kb("Esc", "Konec"),
        Line::raw(""),
        Line::from(Span::styled("  Rozbor", header_style)),
        kb("←/→, h/l", "Předchozí / další slovo"),
        kb("Mezera", "Uzamknout výběr slova"),
        kb("↑/↓, j/k", "Pohyb v kategoriích"),
        kb("Enter, 0-9", "Zařadit slovo"),
        kb("Esc", "Zrušit výběr"),
        kb("y", "Kopírovat rozbor"),
        kb("Ctrl+N", "Nová věta"),
        Line::raw(""),
        Line::from(Span::styled("  Myš", header_style)),
        kb("Najetí", "Vybrat slovo"),
        kb("Klik", "Uzamknout / zařadit"),
        Line::raw(""),
        Line::from(Span::styled("  Obecné", header_style)),
        kb("F1, ?", "Tato nápověda"),
        kb("q, Ctrl+C", "Konec"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Téma: ", desc_style),
            Span::styled(&app.theme.name, key_style),
        ]),
    ]);

    let area = centered_rect(46, 28, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Nápověda ")
                .title_bottom(Line::from(" F1 nebo Esc zavře ").centered()),
        );

    f.render_widget(paragraph, area);
}
