/// Single-line text field for the deck topic.
///
/// `cursor` is a char index, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicInput {
    value: String,
    cursor: usize,
}

pub const TOPIC_PLACEHOLDER: &str = "Topic (e.g., Space, Cats, 90s Music)";

impl TopicInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Trimmed topic, or `None` for a blank field.
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_submission_trims() {
        let mut input = TopicInput::default();
        for ch in "  Space ".chars() {
            input.insert(ch);
        }
        assert_eq!(input.value(), "  Space ");
        assert_eq!(input.submission().as_deref(), Some("Space"));
    }

    #[test]
    fn blank_input_has_no_submission() {
        let mut input = TopicInput::default();
        assert_eq!(input.submission(), None);
        input.set("   ");
        assert!(input.is_blank());
        assert_eq!(input.submission(), None);
    }

    #[test]
    fn editing_in_the_middle_handles_unicode() {
        let mut input = TopicInput::default();
        input.set("Cts");
        input.home();
        input.move_right();
        input.insert('ä');
        assert_eq!(input.value(), "Cäts");
        input.backspace();
        assert_eq!(input.value(), "Cts");
        input.delete();
        assert_eq!(input.value(), "Cs");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut input = TopicInput::default();
        input.move_left();
        input.backspace();
        input.delete();
        assert_eq!(input.cursor(), 0);
        input.set("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.home();
        input.end();
        assert_eq!(input.cursor(), 2);
    }
}
