//! Result list display state
//!
//! Selection and scrolling over the result cards. The list never reorders
//! or filters: backend relevance order is display order.

use crate::api::SearchResult;
use std::collections::HashSet;

/// List display state
pub struct ListState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible_rows: 5,
        }
    }
}

impl ListState {
    /// Reset for a fresh result set.
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.visible_rows.saturating_sub(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }
}

/// Ids that appear more than once in a result set.
///
/// Unique ids are a backend contract invariant; a violation is logged and
/// the list renders positionally, dropping nothing.
pub fn duplicate_ids(results: &[SearchResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for result in results {
        if !seen.insert(result.id.as_str()) && !duplicates.contains(&result.id) {
            duplicates.push(result.id.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(id: u64) -> SearchResult {
        serde_json::from_value(json!({ "id": id })).unwrap()
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut list = ListState::default();
        list.reset(3);
        assert_eq!(list.selected, Some(0));

        list.select_prev();
        assert_eq!(list.selected, Some(0));

        list.select_next(3);
        list.select_next(3);
        list.select_next(3);
        assert_eq!(list.selected, Some(2));

        list.select_first();
        assert_eq!(list.selected, Some(0));
        list.select_last(3);
        assert_eq!(list.selected, Some(2));
    }

    #[test]
    fn scrolling_keeps_selection_visible() {
        let mut list = ListState {
            visible_rows: 3,
            ..Default::default()
        };
        list.reset(10);

        for _ in 0..5 {
            list.select_next(10);
        }
        assert_eq!(list.selected, Some(5));
        assert_eq!(list.scroll_offset, 3);

        list.select_first();
        assert_eq!(list.scroll_offset, 0);
    }

    #[test]
    fn empty_set_has_no_selection() {
        let mut list = ListState::default();
        list.reset(0);
        assert_eq!(list.selected, None);
        list.select_next(0);
        assert_eq!(list.selected, None);
    }

    #[test]
    fn duplicate_ids_are_reported_once_each() {
        let results = vec![result(1), result(2), result(1), result(1)];
        assert_eq!(duplicate_ids(&results), vec!["1".to_string()]);

        let unique = vec![result(1), result(2)];
        assert!(duplicate_ids(&unique).is_empty());
    }
}
