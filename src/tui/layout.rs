//! Layout helpers: width breakpoints and the flow layout of sentence terms.
//!
//! Single source of truth for width thresholds and term geometry - the
//! renderer and mouse hit-testing both read from here.

use crate::sentence::Term;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Rows taken by one line of terms: label, word, underline
pub const TERM_HEIGHT: u16 = 3;

/// Blank rows between wrapped lines of terms
const LINE_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: minimal terminal, no logs panel
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Display width of a term: the wider of its text and its label
pub fn term_width(term: &Term) -> u16 {
    let text = term.text().width();
    let label = term.label().map(|l| l.width()).unwrap_or(0);
    text.max(label) as u16
}

/// Flow terms left to right, wrapping onto a new line when a term does not
/// fit. A space that would open a line collapses to zero width. Terms that
/// fall below the area get an empty rect.
pub fn layout_terms(widths: &[u16], is_space: &[bool], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(widths.len());
    let mut x = area.x;
    let mut y = area.y;

    for (i, &width) in widths.iter().enumerate() {
        let width = width.min(area.width);
        let line_start = x == area.x;

        if !line_start && x.saturating_add(width) > area.right() {
            x = area.x;
            y = y.saturating_add(TERM_HEIGHT + LINE_GAP);
        }

        let width = if x == area.x && is_space.get(i).copied().unwrap_or(false) {
            0
        } else {
            width
        };

        if y.saturating_add(TERM_HEIGHT) > area.bottom() {
            // Lines only move down, so everything after is off-screen too
            rects.resize(widths.len(), Rect::default());
            break;
        }

        rects.push(Rect::new(x, y, width, TERM_HEIGHT));
        x += width;
    }

    rects
}

/// Layout for a whole sentence
pub fn layout_sentence(terms: &[Term], area: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = terms.iter().map(term_width).collect();
    let spaces: Vec<bool> = terms
        .iter()
        .map(|t| !t.is_categorizable() && t.text().trim().is_empty())
        .collect();
    layout_terms(&widths, &spaces, area)
}

/// Index of the rect containing a cell
pub fn hit_test(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|r| {
        r.width > 0 && column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{taxonomy, CategoryId};
    use crate::sentence::Sentence;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn terms_flow_on_one_line() {
        let rects = layout_terms(&[4, 1, 3], &[false, true, false], Rect::new(2, 1, 40, 10));
        assert_eq!(
            rects,
            vec![
                Rect::new(2, 1, 4, 3),
                Rect::new(6, 1, 1, 3),
                Rect::new(7, 1, 3, 3),
            ]
        );
    }

    #[test]
    fn terms_wrap_and_leading_space_collapses() {
        let rects = layout_terms(
            &[5, 1, 5, 1, 5],
            &[false, true, false, true, false],
            Rect::new(0, 0, 11, 20),
        );
        assert_eq!(rects[2], Rect::new(6, 0, 5, 3));
        // The space after the second word would overflow, wraps and collapses
        assert_eq!(rects[3], Rect::new(0, 4, 0, 3));
        assert_eq!(rects[4], Rect::new(0, 4, 5, 3));
    }

    #[test]
    fn overflowing_lines_get_empty_rects() {
        let rects = layout_terms(&[5, 5], &[false, false], Rect::new(0, 0, 6, 4));
        assert_eq!(rects[0], Rect::new(0, 0, 5, 3));
        assert_eq!(rects[1], Rect::default());
    }

    #[test]
    fn area_near_the_coordinate_limit_does_not_overflow() {
        // 200 five-cell words, one per line, at the bottom of the u16 range
        let rects = layout_terms(&[5; 200], &[false; 200], Rect::new(0, 65_000, 5, 500));
        assert_eq!(rects.len(), 200);
        assert_eq!(rects[0], Rect::new(0, 65_000, 5, 3));
        assert_eq!(rects.iter().filter(|r| r.width > 0).count(), 125);
        assert_eq!(rects[199], Rect::default());
    }

    #[test]
    fn label_widens_term() {
        let tree = taxonomy::czech();
        let mut sentence = Sentence::parse("a b");
        if let Some(term) = sentence.term_mut(0) {
            term.update_category(&tree, CategoryId(7));
        }
        assert_eq!(term_width(&sentence.terms()[0]), 4);
        assert_eq!(term_width(&sentence.terms()[2]), 1);
    }

    #[test]
    fn hit_test_finds_term_and_skips_collapsed() {
        let rects = vec![Rect::new(0, 0, 4, 3), Rect::new(0, 4, 0, 3), Rect::new(0, 4, 3, 3)];
        assert_eq!(hit_test(&rects, 2, 1), Some(0));
        assert_eq!(hit_test(&rects, 0, 5), Some(2));
        assert_eq!(hit_test(&rects, 10, 10), None);
    }
}
