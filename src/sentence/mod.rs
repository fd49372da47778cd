//! Sentence splitting
//!
//! A sentence is an ordered list of terms. Words are categorizable; the
//! single spaces between them and a trailing `! . , ?` are not.
//!
//! Given "Mary had a little lamb." the terms are
//! `["Mary", " ", "had", " ", "a", " ", "little", " ", "lamb", "."]` and the
//! categorizable ones are `["Mary", "had", "a", "little", "lamb"]`.

mod term;

pub use term::Term;

use crate::category::CategoryTree;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Text and kind of a single term, as produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermToken {
    pub text: String,
    pub categorizable: bool,
}

impl TermToken {
    pub fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            categorizable: true,
        }
    }

    pub fn separator(text: &str) -> Self {
        Self {
            text: text.to_string(),
            categorizable: false,
        }
    }
}

/// `<word><mark>`: at least one character, then exactly one trailing mark
fn trailing_mark() -> &'static Regex {
    static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(.+)([!.,?])$").expect("Valid trailing mark regex"));
    &PATTERN
}

/// Split a raw sentence into ordered term descriptors.
///
/// Whitespace runs collapse to one non-categorizable `" "` between
/// fragments and the ends are trimmed. A fragment consisting only of a mark
/// (e.g. `"."`) has nothing before the mark and stays a single categorizable
/// term.
pub fn split_into_terms(sentence: &str) -> Vec<TermToken> {
    let fragments: Vec<&str> = sentence.split_whitespace().collect();
    let mut terms = Vec::with_capacity(fragments.len() * 2);

    for (i, fragment) in fragments.iter().enumerate() {
        match trailing_mark().captures(fragment) {
            Some(caps) => {
                terms.push(TermToken::word(&caps[1]));
                terms.push(TermToken::separator(&caps[2]));
            }
            None => terms.push(TermToken::word(fragment)),
        }

        if i + 1 < fragments.len() {
            terms.push(TermToken::separator(" "));
        }
    }

    terms
}

/// A tokenized sentence with per-term category state
#[derive(Debug, Clone, Default)]
pub struct Sentence {
    terms: Vec<Term>,
}

impl Sentence {
    /// Tokenize once and build terms
    pub fn parse(input: &str) -> Self {
        let terms = split_into_terms(input)
            .into_iter()
            .map(Term::from_token)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    pub fn term_mut(&mut self, index: usize) -> Option<&mut Term> {
        self.terms.get_mut(index)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Concatenated term texts (the normalized input)
    pub fn text(&self) -> String {
        self.terms.iter().map(|t| t.text()).collect()
    }

    /// Indices of categorizable terms, in order
    pub fn categorizable_indices(&self) -> Vec<usize> {
        self.terms
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_categorizable())
            .map(|(i, _)| i)
            .collect()
    }

    /// (categorized, categorizable) counts
    pub fn progress(&self) -> (usize, usize) {
        self.terms
            .iter()
            .filter(|t| t.is_categorizable())
            .fold((0, 0), |(done, total), t| {
                let done = if t.label().is_some() { done + 1 } else { done };
                (done, total + 1)
            })
    }

    /// Sentence with `word/Short` for every labelled word
    pub fn annotated(&self, tree: &CategoryTree) -> String {
        self.terms
            .iter()
            .map(|term| match term.category() {
                Some(id) => match tree.resolve(id).short_name {
                    Some(short) => format!("{}/{}", term.text(), short),
                    None => term.text().to_string(),
                },
                None => term.text().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{taxonomy, CategoryId};

    fn c(word: &str) -> TermToken {
        TermToken::word(word)
    }

    fn n(text: &str) -> TermToken {
        TermToken::separator(text)
    }

    #[test]
    fn splits_words_by_space() {
        assert_eq!(
            split_into_terms("Mary had a little lamb"),
            vec![
                c("Mary"),
                n(" "),
                c("had"),
                n(" "),
                c("a"),
                n(" "),
                c("little"),
                n(" "),
                c("lamb")
            ]
        );
    }

    #[test]
    fn comma_is_standalone_term() {
        assert_eq!(
            split_into_terms("Rather odd, isn't it"),
            vec![
                c("Rather"),
                n(" "),
                c("odd"),
                n(","),
                n(" "),
                c("isn't"),
                n(" "),
                c("it")
            ]
        );
    }

    #[test]
    fn question_mark_is_standalone_term() {
        assert_eq!(
            split_into_terms("What hath God wrought?"),
            vec![
                c("What"),
                n(" "),
                c("hath"),
                n(" "),
                c("God"),
                n(" "),
                c("wrought"),
                n("?")
            ]
        );
    }

    #[test]
    fn exclamation_mark_is_standalone_term() {
        assert_eq!(split_into_terms("Boom!"), vec![c("Boom"), n("!")]);
    }

    #[test]
    fn dot_is_standalone_term() {
        assert_eq!(split_into_terms("Splash."), vec![c("Splash"), n(".")]);
    }

    #[test]
    fn filters_out_multiple_spaces() {
        assert_eq!(
            split_into_terms("Here    there"),
            vec![c("Here"), n(" "), c("there")]
        );
    }

    #[test]
    fn filters_out_new_lines() {
        assert_eq!(
            split_into_terms("\n After new line"),
            vec![c("After"), n(" "), c("new"), n(" "), c("line")]
        );
    }

    #[test]
    fn only_last_mark_is_split() {
        assert_eq!(split_into_terms("Really?!"), vec![c("Really?"), n("!")]);
    }

    #[test]
    fn isolated_mark_stays_categorizable() {
        assert_eq!(
            split_into_terms("Wait . now"),
            vec![c("Wait"), n(" "), c("."), n(" "), c("now")]
        );
    }

    #[test]
    fn diacritics_survive_split() {
        assert_eq!(
            split_into_terms("Žluťoučký kůň úpěl."),
            vec![c("Žluťoučký"), n(" "), c("kůň"), n(" "), c("úpěl"), n(".")]
        );
    }

    #[test]
    fn empty_input_yields_no_terms() {
        assert!(split_into_terms("").is_empty());
        assert!(split_into_terms("   \n\t ").is_empty());
    }

    #[test]
    fn concatenation_reproduces_normalized_input() {
        for input in [
            "Mary had a little lamb",
            "  Rather   odd,  isn't it ",
            "\n After new line",
            "Boom!",
            "a\tb\n\nc.",
        ] {
            let joined: String = split_into_terms(input)
                .iter()
                .map(|t| t.text.as_str())
                .collect();
            let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
            assert_eq!(joined, normalized, "input {:?}", input);
        }
    }

    #[test]
    fn sentence_tracks_categorizable_indices_and_progress() {
        let tree = taxonomy::czech();
        let mut sentence = Sentence::parse("Pes štěká.");
        assert_eq!(sentence.text(), "Pes štěká.");
        assert_eq!(sentence.categorizable_indices(), vec![0, 2]);
        assert_eq!(sentence.progress(), (0, 2));

        if let Some(term) = sentence.term_mut(0) {
            term.update_category(&tree, CategoryId(1));
        }
        assert_eq!(sentence.progress(), (1, 2));
        assert_eq!(sentence.annotated(&tree), "Pes/Po štěká.");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn joined(terms: &[TermToken]) -> String {
            terms.iter().map(|t| t.text.as_str()).collect()
        }

        proptest! {
            #[test]
            fn terms_concatenate_to_collapsed_input(input in any::<String>()) {
                let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
                prop_assert_eq!(joined(&split_into_terms(&input)), normalized);
            }

            #[test]
            fn sentence_like_input_concatenates_back(input in "[a-zěščřžýáíé.,!? \t\n]{0,40}") {
                let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
                prop_assert_eq!(joined(&split_into_terms(&input)), normalized);
            }

            #[test]
            fn no_space_term_at_either_end(input in "[a-z.,!? \t\n]{0,40}") {
                let terms = split_into_terms(&input);
                if let (Some(first), Some(last)) = (terms.first(), terms.last()) {
                    prop_assert!(first.categorizable);
                    prop_assert_ne!(first.text.as_str(), " ");
                    prop_assert_ne!(last.text.as_str(), " ");
                }
            }

            #[test]
            fn spaces_never_repeat(input in any::<String>()) {
                let terms = split_into_terms(&input);
                for pair in terms.windows(2) {
                    prop_assert!(!(pair[0].text == " " && pair[1].text == " "));
                }
                prop_assert!(terms.iter().all(|t| !t.text.is_empty()));
            }
        }
    }
}
