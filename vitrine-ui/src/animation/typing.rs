// Vitrine STORY-004: Typing banner state machine
//
// Cycles through role titles character by character: type the word out,
// hold it, delete it, move on. An explicit {Typing, Pausing, Deleting}
// machine driven by a single external tick source; the driver asks
// `delay()` how long to wait before the next tick, so tests never need
// real timers.

use std::time::Duration;

/// Current phase of the banner cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing one more character per tick
    Typing,
    /// Holding the complete word for one (long) tick
    Pausing,
    /// Hiding one character per tick
    Deleting,
}

/// Typing banner over a cyclic word list
pub struct TypingBanner {
    words: Vec<String>,
    word_idx: usize,
    visible_chars: usize,
    phase: Phase,
    type_delay: Duration,
    pause_delay: Duration,
    delete_delay: Duration,
}

impl TypingBanner {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word_idx: 0,
            visible_chars: 0,
            phase: Phase::Typing,
            type_delay: Duration::from_millis(200),
            pause_delay: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(100),
        }
    }

    /// Set custom pacing (for testing or taste)
    pub fn with_delays(mut self, typing: Duration, pausing: Duration, deleting: Duration) -> Self {
        self.type_delay = typing;
        self.pause_delay = pausing;
        self.delete_delay = deleting;
        self
    }

    fn word(&self) -> &str {
        self.words
            .get(self.word_idx)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn word_chars(&self) -> usize {
        self.word().chars().count()
    }

    /// Advance the machine exactly one step
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.visible_chars < self.word_chars() {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= self.word_chars() {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.visible_chars > 0 {
                    self.visible_chars -= 1;
                }
                if self.visible_chars == 0 {
                    self.word_idx = (self.word_idx + 1) % self.words.len().max(1);
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// How long the driver should wait before the next tick
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.type_delay,
            Phase::Pausing => self.pause_delay,
            Phase::Deleting => self.delete_delay,
        }
    }

    /// The currently visible prefix of the current word
    pub fn current(&self) -> &str {
        let word = self.word();
        match word.char_indices().nth(self.visible_chars) {
            Some((idx, _)) => &word[..idx],
            None => word,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_idx
    }

    /// Back to the first character of the first word
    pub fn reset(&mut self) {
        self.word_idx = 0;
        self.visible_chars = 0;
        self.phase = Phase::Typing;
    }
}
