//! Filter context: the data the machine owns and the widget tree renders.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The state carried through every transition of the selection machine.
///
/// `results` and `selected` are derived/normalized views: `results` is
/// always recomputed from `vocabulary` and `input_value`, and `selected`
/// is deduplicated and sorted on every mutation. Consumers read this as
/// a snapshot; only the machine writes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterContext {
    /// Full set of selectable labels, replaced wholesale on external
    /// update and never mutated in place
    pub vocabulary: Vec<String>,

    /// Raw text in the search box
    pub input_value: String,

    /// Entries of `vocabulary` whose lowercase form contains the
    /// lowercase `input_value`, in vocabulary order
    pub results: Vec<String>,

    /// Committed label selection, deduplicated and sorted
    pub selected: Vec<String>,

    /// Index into `results` highlighted by keyboard navigation
    pub current_result: Option<usize>,

    /// Last validation failure
    pub error: Option<ValidationError>,

    /// Token regenerated each time `error` is set, keying transient
    /// error-display animations
    pub error_id: Option<Uuid>,

    /// Whether the last commit succeeded
    pub valid: bool,

    /// Whether the selection is interpreted as an exclusion
    pub invert: bool,
}

impl FilterContext {
    /// Recompute `results` from the current vocabulary and input text.
    pub(crate) fn refresh_results(&mut self) {
        self.results = filter_vocabulary(&self.vocabulary, &self.input_value);
    }

    /// The result entries actually offered to the user: matches not
    /// already selected, sorted.
    pub fn suggestions(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .results
            .iter()
            .filter(|r| !self.selected.contains(r))
            .cloned()
            .collect();
        out.sort();
        out
    }
}

/// Case-insensitive substring filter, preserving vocabulary order.
pub(crate) fn filter_vocabulary(vocabulary: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    vocabulary
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Deduplicate and lexicographically sort a selection.
pub(crate) fn normalize_selection(mut selection: Vec<String>) -> Vec<String> {
    selection.sort();
    selection.dedup();
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let vocabulary = vocab(&["Cat", "dog", "Catfish"]);
        assert_eq!(
            filter_vocabulary(&vocabulary, "cat"),
            vocab(&["Cat", "Catfish"])
        );
        assert_eq!(filter_vocabulary(&vocabulary, "FISH"), vocab(&["Catfish"]));
    }

    #[test]
    fn empty_input_matches_everything() {
        let vocabulary = vocab(&["b", "a"]);
        assert_eq!(filter_vocabulary(&vocabulary, ""), vocab(&["b", "a"]));
    }

    #[test]
    fn normalize_sorts_and_dedupes() {
        let selection = vocab(&["dog", "ant", "dog", "cat"]);
        assert_eq!(normalize_selection(selection), vocab(&["ant", "cat", "dog"]));
    }

    #[test]
    fn suggestions_exclude_selected_and_sort() {
        let mut ctx = FilterContext {
            vocabulary: vocab(&["dog", "cat", "ant"]),
            selected: vocab(&["cat"]),
            ..Default::default()
        };
        ctx.refresh_results();
        assert_eq!(ctx.suggestions(), vocab(&["ant", "dog"]));
    }
}
