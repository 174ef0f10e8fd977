// Vitrine Chat Transcript
// STORY-007: Session and transcript
//
// Append-only chat log with a render cursor. Entries stay available for
// history; the cursor lets a frontend pick up only what it has not shown
// yet.

use vitrine_utils::ChatMessage;

/// Ordered chat log shared by the session and the frontend
pub struct Transcript {
    entries: Vec<ChatMessage>,
    /// Index of the first entry not yet handed to the frontend
    cursor: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Append one entry
    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    /// Entries added since the last drain (consumed: a second call returns
    /// nothing until more entries arrive)
    pub fn drain_new(&mut self) -> &[ChatMessage] {
        let start = self.cursor;
        self.cursor = self.entries.len();
        &self.entries[start..]
    }

    /// Look at the undrained entries without consuming them
    pub fn peek_new(&self) -> &[ChatMessage] {
        &self.entries[self.cursor..]
    }

    /// Check whether anything is waiting to be rendered
    pub fn has_new(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
