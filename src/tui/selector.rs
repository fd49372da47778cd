// Category selector - floating option list under the active term
//
// Exactly zero or one term is active. A click locks the selection so that
// hovering other terms does not move the selector; hovering only works while
// nothing is locked. Choosing an option hands (term, category) back to the
// caller, which applies it to the sentence, and hides the selector.
//
// Options of a group sit under a non-selectable header row. When the frame
// is too short for every row the list scrolls; the selector owns the scroll
// offset so drawing and mouse hit-testing agree on what is under a cell.

use crate::category::{CategoryId, CategoryTree, SelectorOption};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Which term is active and how it became active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Nothing selected, selector hidden
    #[default]
    Idle,
    /// Term selected by hovering; later hovers replace it
    HoverActive(usize),
    /// Term selected by clicking; immune to hover
    ClickLocked(usize),
}

impl SelectorState {
    pub fn term(&self) -> Option<usize> {
        match *self {
            SelectorState::Idle => None,
            SelectorState::HoverActive(i) | SelectorState::ClickLocked(i) => Some(i),
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, SelectorState::ClickLocked(_))
    }
}

/// Actions returned by selector key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorAction {
    /// Key not meant for the selector
    Ignored,
    /// Input consumed, nothing for the caller to do
    None,
    /// Assign the category to the term
    Choose { term: usize, category: CategoryId },
    /// Selection cleared
    Close,
}

/// One displayed line of the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRow {
    /// Group label, not selectable; indexes `group_names`
    Header(usize),
    /// Index into `options`
    Option(usize),
}

/// Header rows inserted before the first option of every group
fn build_rows(options: &[SelectorOption]) -> (Vec<SelectorRow>, Vec<String>) {
    let mut rows = Vec::with_capacity(options.len());
    let mut groups: Vec<String> = Vec::new();
    let mut current: Option<&str> = None;

    for (i, option) in options.iter().enumerate() {
        let group = option.group.as_deref();
        if group != current {
            if let Some(name) = group {
                rows.push(SelectorRow::Header(groups.len()));
                groups.push(name.to_string());
            }
            current = group;
        }
        rows.push(SelectorRow::Option(i));
    }

    (rows, groups)
}

/// Floating category selector
#[derive(Debug, Clone)]
pub struct CategorySelector {
    state: SelectorState,
    options: Vec<SelectorOption>,
    rows: Vec<SelectorRow>,
    group_names: Vec<String>,
    /// Highlighted option (keyboard cursor), an index into `options`
    cursor: usize,
    /// First row shown inside the border
    offset: usize,
    /// Where the selector was last positioned; `None` while idle
    area: Option<Rect>,
}

impl CategorySelector {
    pub fn new(tree: &CategoryTree) -> Self {
        let options = tree.options();
        let (rows, group_names) = build_rows(&options);
        Self {
            state: SelectorState::Idle,
            options,
            rows,
            group_names,
            cursor: 0,
            offset: 0,
            area: None,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn selected_term(&self) -> Option<usize> {
        self.state.term()
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn group_name(&self, header: usize) -> Option<&str> {
        self.group_names.get(header).map(String::as_str)
    }

    /// Rows that fit inside the border at the current scroll offset
    pub fn visible_rows(&self) -> &[SelectorRow] {
        let start = self.offset.min(self.rows.len());
        let end = (start + self.viewport_height()).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn is_visible(&self) -> bool {
        self.state != SelectorState::Idle
    }

    /// A term was hovered. Ignored while a click lock is held.
    pub fn term_hovered(&mut self, term: usize, anchor: Rect, bounds: Rect) {
        if self.state.is_locked() {
            return;
        }
        if self.state != SelectorState::HoverActive(term) {
            tracing::trace!("Selector: hover term {}", term);
            self.cursor = 0;
            self.offset = 0;
        }
        self.state = SelectorState::HoverActive(term);
        self.reposition(anchor, bounds);
    }

    /// A term was clicked. Always wins over hover.
    pub fn term_clicked(&mut self, term: usize, anchor: Rect, bounds: Rect) {
        if self.state.term() != Some(term) {
            self.cursor = 0;
            self.offset = 0;
        }
        tracing::debug!("Selector: locked on term {}", term);
        self.state = SelectorState::ClickLocked(term);
        self.reposition(anchor, bounds);
    }

    /// Pick an option. No-op without a selected term or for a missing option.
    pub fn choose(&mut self, option: usize) -> Option<(usize, CategoryId)> {
        let term = self.state.term()?;
        let id = self.options.get(option)?.id;
        self.clear();
        Some((term, id))
    }

    /// Hide the selector and forget the active term
    pub fn clear(&mut self) {
        self.state = SelectorState::Idle;
        self.area = None;
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn cursor_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.options.len() - 1
        } else {
            self.cursor - 1
        };
        self.scroll_to_cursor();
    }

    pub fn cursor_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.options.len();
        self.scroll_to_cursor();
    }

    /// Option under a screen cell, if the selector is shown there.
    /// Header rows and the border hold no option.
    pub fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;
        let inside = column > area.x
            && column < area.right().saturating_sub(1)
            && row > area.y
            && row < area.bottom().saturating_sub(1);
        if !inside {
            return None;
        }
        match self.visible_rows().get((row - area.y - 1) as usize)? {
            SelectorRow::Option(index) => Some(*index),
            SelectorRow::Header(_) => None,
        }
    }

    /// Row of the option under the cursor
    fn cursor_row(&self) -> usize {
        self.rows
            .iter()
            .position(|r| *r == SelectorRow::Option(self.cursor))
            .unwrap_or(0)
    }

    fn viewport_height(&self) -> usize {
        self.area
            .map(|a| a.height.saturating_sub(2) as usize)
            .unwrap_or(self.rows.len())
    }

    /// Scroll just enough to show the cursor, with its group header when
    /// the cursor sits on a group's first option
    fn scroll_to_cursor(&mut self) {
        let height = self.viewport_height();
        if height == 0 {
            return;
        }
        let row = self.cursor_row();
        let top = match row.checked_sub(1).map(|r| self.rows[r]) {
            Some(SelectorRow::Header(_)) if height > 1 => row - 1,
            _ => row,
        };
        if top < self.offset {
            self.offset = top;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|a| {
            column >= a.x && column < a.right() && row >= a.y && row < a.bottom()
        })
    }

    /// Keyboard handling while the selector is visible
    pub fn handle_key(&mut self, key: KeyCode) -> SelectorAction {
        if !self.is_visible() {
            return SelectorAction::Ignored;
        }
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_up();
                SelectorAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor_down();
                SelectorAction::None
            }
            KeyCode::Enter => self.choose_action(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.choose_action(c as usize - '0' as usize)
            }
            KeyCode::Esc => {
                self.clear();
                SelectorAction::Close
            }
            _ => SelectorAction::Ignored,
        }
    }

    fn choose_action(&mut self, option: usize) -> SelectorAction {
        match self.choose(option) {
            Some((term, category)) => SelectorAction::Choose { term, category },
            None => SelectorAction::None,
        }
    }

    /// Size needed to show every row inside a border
    pub fn preferred_size(&self) -> (u16, u16) {
        let widest = self
            .rows
            .iter()
            .map(|row| match *row {
                SelectorRow::Header(g) => header_line(&self.group_names[g]).width(),
                SelectorRow::Option(i) => option_line(&self.options[i]).width(),
            })
            .max()
            .unwrap_or(0);
        (widest as u16 + 2, self.rows.len() as u16 + 2)
    }

    fn reposition(&mut self, anchor: Rect, bounds: Rect) {
        let (width, height) = self.preferred_size();
        self.area = Some(position_under(anchor, width, height, bounds));
        self.scroll_to_cursor();
    }
}

/// Text of one selector row, e.g. `4 Pum  Příslovečné určení místa`
pub fn option_line(option: &SelectorOption) -> String {
    format!(
        "{:>2} {:<4} {}",
        option.id,
        option.short_name.as_deref().unwrap_or("-"),
        option.name
    )
}

/// Text of a group header row
pub fn header_line(name: &str) -> String {
    format!("── {} ──", name)
}

/// Place a `width` x `height` box centred horizontally under `anchor`, with
/// its top edge on the anchor's bottom edge, kept inside `bounds`.
pub fn position_under(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let center = anchor.x as i32 + anchor.width as i32 / 2;
    let left = center - width as i32 / 2;
    let max_left = (bounds.right() - width) as i32;
    let x = left.clamp(bounds.x as i32, max_left) as u16;

    let max_top = bounds.bottom() - height;
    let y = anchor.bottom().clamp(bounds.y, max_top);

    Rect::new(x, y, width, height)
}
