//! Single-line text editing for form inputs.

use unicode_segmentation::UnicodeSegmentation;

/// Handles text editing with proper Unicode grapheme cluster support.
///
/// `cursor` counts grapheme clusters, not bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Text before the cursor, used by renderers to place the terminal cursor.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.offset(self.cursor)]
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.move_cursor_end();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn enter_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.enter_text(c.encode_utf8(&mut buf));
    }

    /// Insert at the cursor and move past the inserted text.
    ///
    /// A combining mark merges into the grapheme before it, so the cursor is
    /// recomputed from the new prefix rather than advanced by a fixed count.
    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.offset(self.cursor) + text.len();
        self.text.insert_str(at - text.len(), text);
        self.cursor = self.text[..at].graphemes(true).count();
    }

    /// Backspace.
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_grapheme(self.cursor);
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.remove_grapheme(self.cursor);
        }
    }

    /// Ctrl-W: drop trailing whitespace, then the word before it.
    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 && self.is_blank(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.is_blank(self.cursor - 1) {
            self.delete_char();
        }
    }

    fn remove_grapheme(&mut self, index: usize) {
        let start = self.offset(index);
        let end = self.offset(index + 1);
        self.text.replace_range(start..end, "");
    }

    fn is_blank(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|g| g.chars().all(char::is_whitespace))
    }

    /// Byte offset of grapheme `index`, or the text length past the end.
    fn offset(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::DraftInput;

    #[test]
    fn enter_and_delete_chars() {
        let mut draft = DraftInput::default();
        for c in "Alice".chars() {
            draft.enter_char(c);
        }
        assert_eq!(draft.text(), "Alice");
        assert_eq!(draft.cursor(), 5);

        draft.delete_char();
        assert_eq!(draft.text(), "Alic");
        assert_eq!(draft.cursor(), 4);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut draft = DraftInput::default();
        draft.set_text("Bb".to_string());
        draft.move_cursor_left();
        draft.enter_char('o');
        assert_eq!(draft.text(), "Bob");
        assert_eq!(draft.text_before_cursor(), "Bo");
    }

    #[test]
    fn grapheme_clusters_count_as_one() {
        let mut draft = DraftInput::default();
        draft.enter_text("e\u{301}t\u{e9}");
        assert_eq!(draft.grapheme_count(), 3);
        draft.delete_char();
        assert_eq!(draft.text(), "e\u{301}t");
        draft.move_cursor_left();
        draft.delete_char();
        assert_eq!(draft.text(), "t");
    }

    #[test]
    fn delete_char_forward_at_end_is_noop() {
        let mut draft = DraftInput::default();
        draft.set_text("abc".to_string());
        draft.delete_char_forward();
        assert_eq!(draft.text(), "abc");
        draft.reset_cursor();
        draft.delete_char_forward();
        assert_eq!(draft.text(), "bc");
    }

    #[test]
    fn delete_word_backwards_skips_trailing_space() {
        let mut draft = DraftInput::default();
        draft.set_text("close friend  ".to_string());
        draft.delete_word_backwards();
        assert_eq!(draft.text(), "close ");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut draft = DraftInput::default();
        draft.move_cursor_left();
        draft.move_cursor_right();
        assert_eq!(draft.cursor(), 0);
        draft.set_text("ab".to_string());
        draft.move_cursor_right();
        assert_eq!(draft.cursor(), 2);
        draft.move_cursor_end();
        assert_eq!(draft.cursor(), 2);
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut draft = DraftInput::default();
        draft.set_text("555-1111".to_string());
        draft.clear();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }
}
