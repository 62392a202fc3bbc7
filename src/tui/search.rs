//! Search input state for the TUI

/// Controlled text field: the query text, cursor position (byte offset),
/// and whether the input currently has focus.
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    /// The query a submission would run: trimmed, or `None` when blank.
    /// Blank submissions are silently ignored by the controller.
    pub fn submission(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
    }

    /// Byte offset of the character boundary before the cursor.
    pub fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset of the character boundary after the cursor.
    pub fn next_boundary(&self) -> usize {
        self.query[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.query.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_trims_and_rejects_blank() {
        let mut state = SearchState::default();
        assert_eq!(state.submission(), None);

        state.query = "   \t ".to_string();
        assert_eq!(state.submission(), None);

        state.query = "  machine learning  ".to_string();
        assert_eq!(state.submission(), Some("machine learning"));
    }

    #[test]
    fn boundaries_respect_multibyte_chars() {
        let mut state = SearchState::default();
        state.query = "héllo".to_string();
        state.cursor_pos = state.query.len();

        state.cursor_pos = state.prev_boundary();
        assert_eq!(&state.query[state.cursor_pos..], "o");

        state.cursor_pos = 1; // before 'é' (two bytes)
        assert_eq!(state.next_boundary(), 3);
    }
}
