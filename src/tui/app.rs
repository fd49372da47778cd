// TUI application state
//
// Owns the editing session: the typed text, the parsed sentence, the shared
// category tree and the single selector instance. Terms never reach the
// selector directly; the app passes term indices and screen rects to it and
// applies the category it hands back.

use super::components::{EditorPanel, Toast};
use super::hints::Hints;
use super::layout;
use super::modal::Modal;
use super::selector::{CategorySelector, SelectorState};
use crate::category::{CategoryId, CategoryTree};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::sentence::Sentence;
use crate::theme::Theme;
use ratatui::layout::Rect;
use std::time::Instant;

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing the sentence into the editor
    #[default]
    Typing,
    /// Assigning categories to the parsed terms
    Categorizing,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Typing => "Psaní",
            Mode::Categorizing => "Rozbor",
        }
    }
}

/// Main application state for the TUI
pub struct App {
    pub mode: Mode,
    pub editor: EditorPanel,
    pub hints: Hints,
    pub tree: CategoryTree,
    pub sentence: Sentence,
    pub selector: CategorySelector,

    /// Term rects from the last render, indexed like `sentence.terms()`
    pub term_rects: Vec<Rect>,
    /// Whole frame area from the last render (selector bounds)
    pub frame_area: Rect,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    pub theme: Theme,
    pub show_logs: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let tree = CategoryTree::default();
        let selector = CategorySelector::new(&tree);
        Self {
            mode: Mode::Typing,
            editor: EditorPanel::new(),
            hints: Hints::new(config.hint_delay()),
            tree,
            sentence: Sentence::default(),
            selector,
            term_rects: Vec::new(),
            frame_area: Rect::default(),
            modal: None,
            toast: None,
            log_buffer,
            theme: Theme::by_name(&config.theme),
            show_logs: config.show_logs,
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mode transitions
    // ─────────────────────────────────────────────────────────────────────

    /// A character was typed into the editor
    pub fn text_typed(&mut self, now: Instant) {
        self.hints.key_typed(now);
    }

    /// Enter in the editor: parse once and switch to categorizing.
    /// Suppressed while already categorizing.
    pub fn submit(&mut self) {
        self.hints.enter_pressed();
        if self.mode == Mode::Categorizing {
            return;
        }

        let sentence = Sentence::parse(self.editor.text());
        if sentence.is_empty() {
            self.show_toast("Nejdřív napište větu");
            return;
        }

        let (_, words) = sentence.progress();
        tracing::info!(
            "Sentence {:?} split into {} terms ({} words)",
            sentence.text(),
            sentence.terms().len(),
            words
        );
        self.sentence = sentence;
        self.term_rects.clear();
        self.selector.clear();
        self.mode = Mode::Categorizing;
    }

    /// Drop the sentence and go back to typing
    pub fn new_session(&mut self) {
        tracing::info!("New session");
        self.sentence = Sentence::default();
        self.term_rects.clear();
        self.selector.clear();
        self.editor.clear();
        self.mode = Mode::Typing;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Term / selector interaction
    // ─────────────────────────────────────────────────────────────────────

    fn anchor(&self, term: usize) -> Option<Rect> {
        let categorizable = self.sentence.term(term)?.is_categorizable();
        let rect = *self.term_rects.get(term)?;
        (categorizable && rect.width > 0).then_some(rect)
    }

    /// Hover a term; non-categorizable or off-screen terms are ignored
    pub fn hover_term(&mut self, term: usize) {
        if let Some(anchor) = self.anchor(term) {
            self.selector.term_hovered(term, anchor, self.frame_area);
        }
    }

    /// Click a term; non-categorizable or off-screen terms are ignored
    pub fn click_term(&mut self, term: usize) {
        if let Some(anchor) = self.anchor(term) {
            self.selector.term_clicked(term, anchor, self.frame_area);
        }
    }

    /// Apply a category chosen in the selector
    pub fn apply_category(&mut self, term: usize, id: CategoryId) {
        let Some(target) = self.sentence.term_mut(term) else {
            return;
        };
        target.update_category(&self.tree, id);
        if id.is_uncategorized() {
            tracing::info!("\"{}\" vráceno mezi nezařazené", target.text());
            return;
        }
        match self.tree.find(id) {
            Some(entry) => tracing::info!("\"{}\" zařazeno jako {}", target.text(), entry.name),
            None => tracing::warn!("\"{}\": neznámá kategorie {}", target.text(), id),
        }
    }

    /// Choose a selector option by index and apply it
    pub fn choose_option(&mut self, option: usize) {
        if let Some((term, id)) = self.selector.choose(option) {
            self.apply_category(term, id);
        }
    }

    /// Mouse moved to a cell
    pub fn mouse_moved(&mut self, column: u16, row: u16) {
        if self.mode != Mode::Categorizing || self.selector.contains(column, row) {
            return;
        }
        if let Some(term) = layout::hit_test(&self.term_rects, column, row) {
            self.hover_term(term);
        }
    }

    /// Left click on a cell: selector option, term, or elsewhere
    pub fn mouse_clicked(&mut self, column: u16, row: u16) {
        if self.mode != Mode::Categorizing {
            return;
        }
        if self.selector.contains(column, row) {
            if let Some(option) = self.selector.option_at(column, row) {
                self.choose_option(option);
            }
            return;
        }
        match layout::hit_test(&self.term_rects, column, row) {
            Some(term) if self.anchor(term).is_some() => self.click_term(term),
            _ => self.selector.clear(),
        }
    }

    /// Move to the previous/next categorizable term from the active one.
    ///
    /// Plain hover while nothing is locked; while locked the move is a click,
    /// carrying the lock to the neighbour.
    pub fn step_term(&mut self, forward: bool) {
        let words = self.sentence.categorizable_indices();
        if words.is_empty() {
            return;
        }

        let target = match self.selector.selected_term() {
            None => {
                if forward {
                    words[0]
                } else {
                    words[words.len() - 1]
                }
            }
            Some(current) => {
                let pos = words.iter().position(|&w| w == current).unwrap_or(0);
                let next = if forward {
                    (pos + 1) % words.len()
                } else {
                    (pos + words.len() - 1) % words.len()
                };
                words[next]
            }
        };

        match self.selector.state() {
            SelectorState::ClickLocked(_) => self.click_term(target),
            _ => self.hover_term(target),
        }
    }

    /// Lock the selector on the hovered term (keyboard click)
    pub fn click_active(&mut self) {
        if let SelectorState::HoverActive(term) = self.selector.state() {
            self.click_term(term);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Misc
    // ─────────────────────────────────────────────────────────────────────

    /// Annotated sentence for the clipboard
    pub fn annotated_text(&self) -> Option<String> {
        (!self.sentence.is_empty()).then(|| self.sentence.annotated(&self.tree))
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Periodic tick: fire hint timers, expire toasts
    pub fn tick(&mut self, now: Instant) {
        self.hints.tick(now);
        self.clear_expired_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(sentence: &str) -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.editor.set_text(sentence);
        app.frame_area = Rect::new(0, 0, 100, 40);
        app.submit();
        app.term_rects = layout::layout_sentence(app.sentence.terms(), Rect::new(1, 5, 98, 20));
        app
    }

    #[test]
    fn submit_switches_to_categorizing_once() {
        let mut app = app_with("Pes štěká.");
        assert_eq!(app.mode, Mode::Categorizing);
        assert_eq!(app.sentence.text(), "Pes štěká.");

        // Further Enter presses do not re-tokenize
        app.editor.set_text("Jiná věta");
        app.submit();
        assert_eq!(app.sentence.text(), "Pes štěká.");
    }

    #[test]
    fn empty_submit_stays_in_typing() {
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.editor.set_text("   ");
        app.submit();
        assert_eq!(app.mode, Mode::Typing);
        assert!(app.toast.is_some());
    }

    #[test]
    fn clicking_term_then_option_assigns_category() {
        let mut app = app_with("Pes štěká.");
        app.click_term(0);
        assert_eq!(app.selector.state(), SelectorState::ClickLocked(0));

        app.choose_option(1);
        assert_eq!(app.sentence.terms()[0].label(), Some("Po"));
        assert_eq!(app.selector.state(), SelectorState::Idle);
    }

    #[test]
    fn separators_cannot_be_selected() {
        let mut app = app_with("Pes štěká.");
        app.click_term(1);
        app.hover_term(3);
        assert_eq!(app.selector.state(), SelectorState::Idle);
    }

    #[test]
    fn mouse_click_on_option_assigns_category() {
        let mut app = app_with("Pes štěká.");
        let word = app.term_rects[2];
        app.mouse_clicked(word.x, word.y + 1);
        assert_eq!(app.selector.state(), SelectorState::ClickLocked(2));

        let area = app.selector.area().unwrap_or_default();
        // Third row inside the border is option index 2 (Přísudek)
        app.mouse_clicked(area.x + 1, area.y + 3);
        assert_eq!(app.sentence.terms()[2].label(), Some("Př"));
    }

    #[test]
    fn click_on_scrolled_selector_picks_the_visible_option() {
        let mut app = app_with("Pes štěká.");
        app.frame_area = Rect::new(0, 0, 100, 12);
        app.click_term(0);
        for _ in 0..13 {
            app.selector.cursor_down();
        }

        let area = app.selector.area().unwrap_or_default();
        app.mouse_clicked(area.x + 1, area.y + 1);
        assert_eq!(app.sentence.terms()[0].label(), Some("Puz"));
    }

    #[test]
    fn hover_does_not_override_click() {
        let mut app = app_with("Mary had a little lamb");
        let first = app.term_rects[0];
        let third = app.term_rects[4];

        app.mouse_moved(first.x, first.y);
        assert_eq!(app.selector.state(), SelectorState::HoverActive(0));

        app.mouse_clicked(third.x, third.y);
        app.mouse_moved(first.x, first.y);
        assert_eq!(app.selector.state(), SelectorState::ClickLocked(4));
    }

    #[test]
    fn click_outside_clears_selection() {
        let mut app = app_with("Mary had a little lamb");
        app.click_term(0);
        app.mouse_clicked(99, 39);
        assert_eq!(app.selector.state(), SelectorState::Idle);
    }

    #[test]
    fn stepping_skips_separators_and_wraps() {
        let mut app = app_with("Boom, bang!");
        app.step_term(true);
        assert_eq!(app.selector.selected_term(), Some(0));
        app.step_term(true);
        assert_eq!(app.selector.selected_term(), Some(3));
        app.step_term(true);
        assert_eq!(app.selector.selected_term(), Some(0));
        app.step_term(false);
        assert_eq!(app.selector.selected_term(), Some(3));
    }

    #[test]
    fn stepping_while_locked_moves_lock() {
        let mut app = app_with("Boom, bang!");
        app.step_term(true);
        app.click_active();
        app.step_term(true);
        assert_eq!(app.selector.state(), SelectorState::ClickLocked(3));
    }

    #[test]
    fn new_session_resets_everything() {
        let mut app = app_with("Pes štěká.");
        app.click_term(0);
        app.new_session();
        assert_eq!(app.mode, Mode::Typing);
        assert!(app.sentence.is_empty());
        assert_eq!(app.editor.text(), "");
        assert!(!app.selector.is_visible());
    }

    #[test]
    fn applying_uncategorized_removes_the_label() {
        let mut app = app_with("Pes štěká.");
        app.apply_category(0, CategoryId(3));
        assert_eq!(app.sentence.terms()[0].label(), Some("Pt"));

        app.apply_category(0, CategoryId::UNCATEGORIZED);
        assert_eq!(app.sentence.terms()[0].label(), None);
        assert!(app.sentence.terms()[0].is_categorizable());
    }

    #[test]
    fn annotated_text_reflects_labels() {
        let mut app = app_with("Pes štěká.");
        app.apply_category(0, CategoryId(1));
        app.apply_category(2, CategoryId(2));
        assert_eq!(app.annotated_text().as_deref(), Some("Pes/Po štěká/Př."));
    }
}
