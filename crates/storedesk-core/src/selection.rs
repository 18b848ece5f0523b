//! # Selection Tracker
//!
//! The set of record ids ticked in a list view. Selection is independent of
//! pagination: ids stay selected while the user pages away.

use std::collections::BTreeSet;

/// Selected record ids, kept sorted for stable iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle_one(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header checkbox behaviour.
    ///
    /// If the selection is exactly the page's ids, clears it. Otherwise the
    /// selection becomes exactly the page's ids, dropping anything selected
    /// on other pages.
    pub fn toggle_all_on_page<'a, I>(&mut self, page_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let page: BTreeSet<String> = page_ids.into_iter().map(str::to_string).collect();
        if self.ids == page {
            self.ids.clear();
        } else {
            self.ids = page;
        }
    }

    /// True when every one of `page_ids` is selected and nothing else is.
    pub fn equals_page<'a, I>(&self, page_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let page: BTreeSet<&str> = page_ids.into_iter().collect();
        !page.is_empty()
            && page.len() == self.ids.len()
            && page.iter().all(|id| self.ids.contains(*id))
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drops ids that no longer exist. Returns how many were dropped.
    pub fn retain_present<F>(&mut self, mut exists: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.ids.len();
        self.ids.retain(|id| exists(id));
        before - self.ids.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
