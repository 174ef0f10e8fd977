// Vitrine Assistant Bridge
// STORY-005: Generation backend framework
//
// This crate forwards visitor questions plus the portfolio corpus to an
// external text-generation API and records the reply in a transcript. It
// handles:
//
// - Backend abstraction (HTTP today, mock in tests)
// - Error isolation (a failing backend never crashes the app)
// - The send gate (one outstanding call, extra submissions suppressed)
// - The fixed fallback replies for both failure classes
//
// # Architecture
//
// ```text
// Chat frontend (REPL)
//         │
//         ▼
// ┌───────────────────┐
// │    ChatSession    │  ← gate, prompt composition, transcript
// └───────────────────┘
//         │
//         ▼
// ┌───────────────────┐
// │ GenerationBackend │  ← Trait defining the interface
// └───────────────────┘
//         │
//         ▼
// ┌───────────────────┐
// │   Gemini / Mock   │  ← one HTTP call per question
// └───────────────────┘
// ```
//
// # Usage
//
// ```ignore
// let backend = GeminiBackend::new(BackendConfig::default())
//     .map(|b| Box::new(b) as Box<dyn GenerationBackend>);
// let mut session = ChatSession::new(Profile::builtin(), backend);
//
// session.ask("Which PLC platforms have you worked with?").await;
// for entry in session.transcript_mut().drain_new() {
//     println!("{}: {}", entry.speaker, entry.body);
// }
// ```

mod backend;
mod error;
mod gemini;
mod mock;
mod session;
mod transcript;

// Re-export public API
pub use backend::{BackendConfig, GenerationBackend};
pub use error::{AssistError, AssistResult};
pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use session::{
    AskOutcome, ChatSession, APOLOGY_REPLY, INIT_FAILURE_REPLY, UNAVAILABLE_REPLY,
};
pub use transcript::Transcript;

#[cfg(test)]
#[path = "./unit/session_tests.rs"]
mod session_tests;

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_utils::Profile;

    /// Integration test verifying the full question/answer workflow
    #[tokio::test]
    async fn test_session_workflow() {
        let mock = MockBackend::new("test-backend");
        mock.set_reply(Ok("**Siemens** and Allen-Bradley.".to_string()));
        let handle = mock.handle();

        let mut session = ChatSession::new(
            Profile::builtin(),
            Ok(Box::new(mock) as Box<dyn GenerationBackend>),
        );

        // Greeting is already waiting
        let greeting = session.transcript_mut().drain_new().to_vec();
        assert_eq!(greeting.len(), 1);

        // One question, one reply
        let outcome = session.ask("Which PLC platforms?").await;
        assert_eq!(outcome, AskOutcome::Answered);
        assert_eq!(handle.call_count(), 1);

        let new = session.transcript_mut().drain_new().to_vec();
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].body, "Which PLC platforms?");
        assert!(new[1].body.contains("Siemens"));

        // The composed prompt carries the corpus and the framing line
        let prompt = handle.last_prompt();
        assert!(prompt.contains("RESUME"));
        assert!(prompt.contains("Based on the information above"));
        assert!(prompt.ends_with("\"Which PLC platforms?\""));
    }

    /// The gate is open again after a failure and the next ask succeeds
    #[tokio::test]
    async fn test_session_recovers_after_failure() {
        let mock = MockBackend::new("flaky");
        mock.set_reply(Err(AssistError::Timeout { duration_secs: 30 }));
        let handle = mock.handle();

        let mut session = ChatSession::new(
            Profile::builtin(),
            Ok(Box::new(mock) as Box<dyn GenerationBackend>),
        );
        session.transcript_mut().drain_new();

        assert_eq!(session.ask("first?").await, AskOutcome::Failed);
        assert!(!session.is_busy());

        handle.set_reply(Ok("recovered".to_string()));
        assert_eq!(session.ask("second?").await, AskOutcome::Answered);
        assert_eq!(handle.call_count(), 2);
    }
}
