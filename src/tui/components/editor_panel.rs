//! Editor panel - the single-line input where the sentence is typed
//!
//! Owns the text buffer and cursor. Enter is deliberately not handled here:
//! it bubbles up so the app can switch to categorizing mode.

use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct EditorPanel {
    buffer: String,
    /// Cursor position in chars
    cursor: usize,
    /// Whether the last handled key inserted a character
    typed: bool,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// True if the last key passed to `handle_key` typed a character
    pub fn take_typed(&mut self) -> bool {
        std::mem::take(&mut self.typed)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
    }

    fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index(self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Render the input box; `active` shows the cursor
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, active: bool) {
        let border = if active { theme.highlight } else { theme.border };
        let text_style = if active {
            Style::default().fg(theme.foreground)
        } else {
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(" Věta ");

        let paragraph = Paragraph::new(Line::from(Span::styled(self.buffer.as_str(), text_style)))
            .block(block);
        f.render_widget(paragraph, area);

        if active {
            let before: String = self.buffer.chars().take(self.cursor).collect();
            let x = area.x + 1 + before.width() as u16;
            if x < area.right().saturating_sub(1) {
                f.set_cursor_position(Position::new(x, area.y + 1));
            }
        }
    }
}

impl Interactive for EditorPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.typed = false;
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Handled::No;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                self.typed = true;
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete();
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.buffer.chars().count();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:rozebrat  Esc:konec  F1:nápověda")
    }
}
