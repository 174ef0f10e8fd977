// Vitrine Assistant Bridge - Mock Backend
// STORY-005: Generation backend framework
//
// Mock implementation of GenerationBackend for unit testing. Allows tests
// to control replies, simulate failures, and verify prompts.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::backend::GenerationBackend;
use super::error::AssistResult;

/// Mock backend for testing session flows without network access.
///
/// `MockBackend` allows tests to:
/// - Control what `generate()` returns
/// - Simulate errors and failures
/// - Verify how many calls were made and with which prompt
///
/// # Example
///
/// ```ignore
/// use crate::MockBackend;
///
/// let mock = MockBackend::new("test");
/// mock.set_reply(Ok("**Answer** text".to_string()));
///
/// let reply = mock.generate("question").await;
/// assert!(reply.is_ok());
/// assert_eq!(mock.call_count(), 1);
/// ```
pub struct MockBackend {
    name: String,

    /// Response to return from `generate()`
    reply: Arc<Mutex<AssistResult<String>>>,

    /// Count of `generate()` invocations
    call_count: Arc<AtomicUsize>,

    /// Last prompt passed to `generate()`
    last_prompt: Arc<Mutex<String>>,
}

impl MockBackend {
    /// Create a new mock backend.
    ///
    /// # Arguments
    ///
    /// * `name` - Name for this mock (used in logs and errors)
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            reply: Arc::new(Mutex::new(Ok(String::new()))),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(String::new())),
        }
    }

    /// Set the response that `generate()` will return.
    pub fn set_reply(&self, reply: AssistResult<String>) {
        *self.reply.lock().unwrap() = reply;
    }

    /// Get the number of times `generate()` was invoked.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last prompt passed to `generate()`.
    pub fn last_prompt(&self) -> String {
        self.last_prompt.lock().unwrap().clone()
    }

    /// Reset the counter and the recorded prompt.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
        self.last_prompt.lock().unwrap().clear();
    }

    /// A handle sharing this mock's counters, usable as a second owner
    /// (the session takes one boxed copy, the test keeps the other).
    pub fn handle(&self) -> Self {
        Self {
            name: self.name.clone(),
            reply: self.reply.clone(),
            call_count: self.call_count.clone(),
            last_prompt: self.last_prompt.clone(),
        }
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, prompt: &str) -> AssistResult<String> {
        // Record the call
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_prompt.lock().unwrap() = prompt.to_string();

        // Return configured response
        self.reply.lock().unwrap().clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
