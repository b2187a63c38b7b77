//! Single-line editable text buffer
//!
//! The cursor is a char index into the value, so every edit stays on a
//! UTF-8 boundary.

/// Editable single-line text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars, `0..=char_count`
    cursor: usize,
}

impl TextField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `value` with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current literal content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole content, cursor moves to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = Self::with_value(value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a char at the cursor
    pub fn insert_char(&mut self, c: char) {
        // Single-line field
        if c == '\n' || c == '\r' {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, dropping line breaks
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Text before the cursor, used by renderers to place the caret
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_offset(self.cursor)]
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut field = TextField::new();
        field.insert_str("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);

        field.move_left();
        field.insert_char('X');
        assert_eq!(field.value(), "abXc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::with_value("héllo");
        field.move_home();
        field.move_right();
        field.move_right();
        assert_eq!(field.before_cursor(), "hé");

        assert!(field.backspace());
        assert_eq!(field.value(), "hllo");
        assert!(field.delete());
        assert_eq!(field.value(), "hlo");
    }

    #[test]
    fn test_line_breaks_are_dropped() {
        let mut field = TextField::new();
        field.insert_str("one\ntwo\r");
        assert_eq!(field.value(), "onetwo");
    }

    #[test]
    fn test_edges_are_noops() {
        let mut field = TextField::with_value("a");
        assert!(!field.delete());
        field.move_right();
        assert_eq!(field.cursor(), 1);

        field.move_home();
        assert!(!field.backspace());
        field.move_left();
        assert_eq!(field.cursor(), 0);
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut field = TextField::with_value("old");
        field.move_home();
        field.set_value("newer");
        assert_eq!(field.cursor(), 5);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
