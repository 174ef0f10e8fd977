// Vitrine shared types
//
// Data definitions used by both the UI and the assistant bridge: transcript
// messages, reply markup, and the injected profile resource.

pub mod markup;
pub mod message;
pub mod profile;

pub use message::{ChatMessage, Speaker};
pub use profile::{Profile, ProfileError};
