// Vitrine Chat Data Model
// STORY-001: Chat transcript types
//
// Message types for the assistant transcript (user questions, assistant
// replies, bridge status entries).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a transcript entry, determining prefix glyph and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The visitor typing questions (cyan, ❯ glyph)
    User,
    /// The AI assistant, including bridge error entries (magenta, ✦ glyph)
    Assistant,
}

impl Speaker {
    /// Get ANSI color code for this speaker
    pub fn color_code(&self) -> &'static str {
        match self {
            Speaker::User => "\x1b[36m",      // Cyan
            Speaker::Assistant => "\x1b[35m", // Magenta
        }
    }

    /// Get prefix glyph for this speaker
    pub fn glyph(&self) -> &'static str {
        match self {
            Speaker::User => "❯",
            Speaker::Assistant => "✦",
        }
    }

    /// Parse from CLI string argument
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Speaker::User),
            "assistant" | "ai" => Some(Speaker::Assistant),
            _ => None,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Assistant => write!(f, "assistant"),
        }
    }
}

/// One transcript entry with speaker and body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub body: String,
    /// Timestamp when the entry was created (milliseconds since epoch)
    pub timestamp: u64,
}

impl ChatMessage {
    pub fn new(speaker: Speaker, body: String) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        Self {
            speaker,
            body,
            timestamp,
        }
    }

    /// Create a user entry
    pub fn user(body: impl Into<String>) -> Self {
        Self::new(Speaker::User, body.into())
    }

    /// Create an assistant entry
    pub fn assistant(body: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, body.into())
    }

    /// Prefix used when printing this entry ("❯ user" / "✦ assistant")
    pub fn glyph_line_prefix(&self) -> String {
        format!("{} {}", self.speaker.glyph(), self.speaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_from_str() {
        assert_eq!(Speaker::from_str("user"), Some(Speaker::User));
        assert_eq!(Speaker::from_str("USER"), Some(Speaker::User));
        assert_eq!(Speaker::from_str("assistant"), Some(Speaker::Assistant));
        assert_eq!(Speaker::from_str("ai"), Some(Speaker::Assistant));
        assert_eq!(Speaker::from_str("invalid"), None);
    }

    #[test]
    fn test_message_creation() {
        let msg = ChatMessage::user("What projects have you shipped?");
        assert_eq!(msg.speaker, Speaker::User);
        assert_eq!(msg.body, "What projects have you shipped?");
        assert!(msg.timestamp > 0);
    }

    #[test]
    fn test_speaker_display() {
        assert_eq!(Speaker::User.to_string(), "user");
        assert_eq!(Speaker::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_assistant_constructor() {
        let msg = ChatMessage::assistant("Hello!");
        assert_eq!(msg.speaker, Speaker::Assistant);
        assert_eq!(msg.glyph_line_prefix(), "✦ assistant");
    }
}
