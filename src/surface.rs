/// The text region the user is typing into, plus the caret marker drawn after it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    content: String,
    cursor: char,
    cursor_attached: bool,
}

impl TextSurface {
    /// An empty surface with the cursor marker attached.
    pub fn new(cursor: char) -> Self {
        Self {
            content: String::new(),
            cursor,
            cursor_attached: true,
        }
    }

    /// Text typed so far, without the cursor marker.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn remove_cursor(&mut self) {
        self.cursor_attached = false;
    }

    pub fn add_cursor(&mut self) {
        self.cursor_attached = true;
    }

    pub fn push_char(&mut self, c: char) {
        self.content.push(c);
    }

    pub fn push_line_break(&mut self) {
        self.content.push('\n');
    }

    /// Drop the last rendered character, line breaks included.
    pub fn delete_last(&mut self) {
        self.content.pop();
    }

    /// What is actually on screen: the content followed by the cursor marker when attached.
    pub fn rendered(&self) -> String {
        let mut out = self.content.clone();
        if self.cursor_attached {
            out.push(self.cursor);
        }
        out
    }
}
