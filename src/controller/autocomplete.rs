use std::time::{Duration, Instant};

use super::debounce::Debouncer;

/// Minimum trimmed query length before suggestions are fetched
const MIN_QUERY_CHARS: usize = 2;

/// Quiet period between the last keystroke and the suggestion fetch
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A suggestion fetch the owner should dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionFetch {
    pub seq: u64,
    pub query: String,
}

/// Query input with a debounced, sequence-tagged suggestion dropdown
///
/// The debounce timer is an instance field, so separate inputs never
/// interfere. Fired fetches carry a monotonically increasing sequence
/// number; responses tagged with anything but the latest issued sequence are
/// stale and dropped, so a slow early request can never overwrite the
/// results of a later one.
#[derive(Debug)]
pub struct SearchBox {
    query: String,
    suggestions: Vec<String>,
    selected: Option<usize>,
    debounce: Debouncer,
    /// Sequence number of the most recently issued fetch
    latest_seq: u64,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            selected: None,
            debounce: Debouncer::new(SEARCH_DEBOUNCE),
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Append a typed character
    pub fn insert(&mut self, c: char, now: Instant) {
        self.query.push(c);
        self.edited(now);
    }

    /// Delete the last character
    pub fn backspace(&mut self, now: Instant) {
        self.query.pop();
        self.edited(now);
    }

    /// Every edit clears the visible dropdown (full-replace semantics: a new
    /// list appears only when the next accepted response lands). Queries
    /// shorter than the minimum cancel any pending schedule instead of
    /// leaving it to fire with stale text.
    fn edited(&mut self, now: Instant) {
        self.suggestions.clear();
        self.selected = None;

        if self.query.trim().chars().count() < MIN_QUERY_CHARS {
            self.debounce.cancel();
        } else {
            self.debounce.schedule(now);
        }
    }

    /// Poll the quiet period; returns the fetch to dispatch once it elapses
    pub fn poll(&mut self, now: Instant) -> Option<SuggestionFetch> {
        if !self.debounce.fire(now) {
            return None;
        }

        self.latest_seq += 1;
        Some(SuggestionFetch {
            seq: self.latest_seq,
            query: self.query.trim().to_string(),
        })
    }

    /// Accept a suggestion response, fully replacing the dropdown. Stale
    /// responses are discarded.
    pub fn accept(&mut self, seq: u64, titles: Vec<String>) {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "Dropping stale suggestion response");
            return;
        }

        self.selected = None;
        self.suggestions = titles;
    }

    /// Move the dropdown highlight down, entering the list on first press
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
            None => 0,
        });
    }

    /// Move the dropdown highlight up
    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    /// Take the highlighted suggestion: the query becomes the suggestion's
    /// exact text and the dropdown closes
    pub fn choose(&mut self) -> Option<String> {
        let title = self.suggestions.get(self.selected?)?.clone();
        self.query = title.clone();
        self.settle();
        Some(title)
    }

    /// Close the dropdown and cancel any pending fetch schedule
    pub fn settle(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.debounce.cancel();
    }

    #[cfg(test)]
    fn type_str(&mut self, text: &str, now: Instant) {
        for c in text.chars() {
            self.insert(c, now);
        }
    }
}
