// Vitrine Chat Session
// STORY-007: Session and transcript
//
// Owns the backend handle, the transcript, and the send gate. Two failure
// classes, neither fatal: a backend that never initialized pins the
// session to a fixed unavailability reply; a failed request becomes one
// apology entry and re-opens the gate.

use vitrine_utils::{ChatMessage, Profile};

use super::backend::GenerationBackend;
use super::error::AssistError;
use super::transcript::Transcript;

/// Reply when no backend was initialized (class-1 failure)
pub const UNAVAILABLE_REPLY: &str = "AI is not available.";

/// Reply after a failed generation call (class-2 failure)
pub const APOLOGY_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// One-time transcript entry pushed when backend construction fails
pub const INIT_FAILURE_REPLY: &str =
    "Error: AI service could not be initialized. Please check the API key configuration.";

/// What happened to one submitted question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// Empty or whitespace-only input; nothing recorded, nothing sent
    Ignored,
    /// A call was already outstanding; the question was dropped, not queued
    Suppressed,
    /// No backend; the fixed unavailability reply was recorded
    Unavailable,
    /// The backend answered and the reply was recorded
    Answered,
    /// The backend failed and the apology was recorded
    Failed,
}

/// Chat session binding a profile, a transcript, and at most one backend
pub struct ChatSession {
    backend: Option<Box<dyn GenerationBackend>>,
    profile: Profile,
    transcript: Transcript,
    /// Send gate: true while a generation call is outstanding
    busy: bool,
}

impl ChatSession {
    /// Build a session from a backend construction result.
    ///
    /// The greeting goes into the transcript first. If the backend failed
    /// to construct, the failure is reported once and the session keeps
    /// running without one; every later question gets the fixed
    /// unavailability reply.
    pub fn new(
        profile: Profile,
        backend: Result<Box<dyn GenerationBackend>, AssistError>,
    ) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::assistant(profile.greeting.clone()));

        let backend = match backend {
            Ok(backend) => {
                log::info!("chat session ready, backend: {}", backend.name());
                Some(backend)
            }
            Err(err) => {
                log::error!("failed to initialize generation backend: {}", err);
                transcript.push(ChatMessage::assistant(INIT_FAILURE_REPLY));
                None
            }
        };

        Self {
            backend,
            profile,
            transcript,
            busy: false,
        }
    }

    /// Submit one question.
    ///
    /// Blank input is ignored outright. While a call is outstanding the
    /// gate suppresses further submissions (no queueing). Otherwise the
    /// question is recorded, the prompt composed from the profile corpus,
    /// and exactly one transcript entry is appended for the outcome. The
    /// gate re-opens on every path.
    pub async fn ask(&mut self, question: &str) -> AskOutcome {
        let question = question.trim();
        if question.is_empty() {
            return AskOutcome::Ignored;
        }
        if self.busy {
            log::debug!("send gate closed, dropping question");
            return AskOutcome::Suppressed;
        }

        let backend = match &self.backend {
            Some(backend) => backend,
            None => {
                self.transcript.push(ChatMessage::assistant(UNAVAILABLE_REPLY));
                return AskOutcome::Unavailable;
            }
        };

        self.transcript.push(ChatMessage::user(question));
        self.busy = true;

        let prompt = self.profile.compose_prompt(question);
        let outcome = match backend.generate(&prompt).await {
            Ok(reply) => {
                self.transcript.push(ChatMessage::assistant(reply));
                AskOutcome::Answered
            }
            Err(err) => {
                log::error!("generation request failed: {}", err);
                self.transcript.push(ChatMessage::assistant(APOLOGY_REPLY));
                AskOutcome::Failed
            }
        };

        self.busy = false;
        outcome
    }

    /// Whether a generation call is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether a backend was successfully initialized
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[cfg(test)]
    pub(crate) fn set_busy_for_test(&mut self, busy: bool) {
        self.busy = busy;
    }
}
