//! A single term of a sentence and its category state

use super::TermToken;
use crate::category::{base_classes, CategoryId, CategoryTree};

/// What a categorizable term shows: style classes and the label above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub classes: Vec<String>,
    pub label: Option<String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            classes: base_classes(),
            label: None,
        }
    }
}

/// A word, space or punctuation mark of the sentence.
///
/// Only categorizable terms carry a presentation; separators render as
/// plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    text: String,
    category: Option<CategoryId>,
    presentation: Option<Presentation>,
}

impl Term {
    pub fn new(text: impl Into<String>, categorizable: bool) -> Self {
        Self {
            text: text.into(),
            category: None,
            presentation: categorizable.then(Presentation::default),
        }
    }

    pub fn from_token(token: TermToken) -> Self {
        Self::new(token.text, token.categorizable)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_categorizable(&self) -> bool {
        self.presentation.is_some()
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    pub fn label(&self) -> Option<&str> {
        self.presentation.as_ref().and_then(|p| p.label.as_deref())
    }

    /// Assign a category and refresh the presentation.
    ///
    /// No short name removes the label and resets to the base classes;
    /// otherwise the label is replaced or created. Calling twice with the
    /// same id leaves the same state as calling once.
    pub fn update_category(&mut self, tree: &CategoryTree, id: CategoryId) {
        let Some(presentation) = self.presentation.as_mut() else {
            tracing::debug!("Term {:?} is not categorizable, ignoring category {}", self.text, id);
            return;
        };

        self.category = Some(id);
        let resolved = tree.resolve(id);

        match resolved.short_name {
            None => {
                presentation.classes = base_classes();
                presentation.label = None;
            }
            Some(short_name) => {
                presentation.classes = resolved.classes;
                match presentation.label.as_mut() {
                    Some(label) => {
                        label.clear();
                        label.push_str(&short_name);
                    }
                    None => presentation.label = Some(short_name),
                }
            }
        }

        tracing::debug!(
            "Term {:?} -> category {} ({})",
            self.text,
            id,
            self.label().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::taxonomy;

    #[test]
    fn new_word_is_uncategorized() {
        let term = Term::new("kůň", true);
        assert!(term.is_categorizable());
        assert_eq!(term.category(), None);
        assert_eq!(term.presentation(), Some(&Presentation::default()));
        assert_eq!(
            term.presentation().map(|p| p.classes.clone()),
            Some(vec!["is-categorizable".to_string(), "is-cat-0".to_string()])
        );
    }

    #[test]
    fn assigning_creates_label() {
        let tree = taxonomy::czech();
        let mut term = Term::new("kůň", true);
        term.update_category(&tree, CategoryId(1));

        assert_eq!(term.category(), Some(CategoryId(1)));
        assert_eq!(term.label(), Some("Po"));
        assert_eq!(
            term.presentation().map(|p| p.classes.clone()),
            Some(vec!["is-categorizable".to_string(), "is-cat-1".to_string()])
        );
    }

    #[test]
    fn reassigning_replaces_label() {
        let tree = taxonomy::czech();
        let mut term = Term::new("rychle", true);
        term.update_category(&tree, CategoryId(1));
        term.update_category(&tree, CategoryId(6));

        assert_eq!(term.label(), Some("Puz"));
        assert_eq!(
            term.presentation().map(|p| p.classes.clone()),
            Some(vec!["is-categorizable".to_string(), "is-cat-4".to_string()])
        );
    }

    #[test]
    fn uncategorizing_removes_label() {
        let tree = taxonomy::czech();
        let mut term = Term::new("pes", true);
        term.update_category(&tree, CategoryId(2));
        term.update_category(&tree, CategoryId::UNCATEGORIZED);

        assert_eq!(term.category(), Some(CategoryId::UNCATEGORIZED));
        assert_eq!(term.presentation(), Some(&Presentation::default()));
    }

    #[test]
    fn update_is_idempotent() {
        let tree = taxonomy::czech();
        for id in [0, 3, 9, 77] {
            let mut once = Term::new("slovo", true);
            once.update_category(&tree, CategoryId(id));

            let mut twice = Term::new("slovo", true);
            twice.update_category(&tree, CategoryId(id));
            twice.update_category(&tree, CategoryId(id));

            assert_eq!(once, twice, "id {}", id);
        }
    }

    #[test]
    fn separators_ignore_categories() {
        let tree = taxonomy::czech();
        let mut term = Term::new(",", false);
        term.update_category(&tree, CategoryId(1));

        assert!(!term.is_categorizable());
        assert_eq!(term.category(), None);
        assert_eq!(term.label(), None);
    }
}
