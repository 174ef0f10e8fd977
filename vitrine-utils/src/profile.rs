// Vitrine Profile Resource
// STORY-003: Injected portfolio data
//
// The resume/project corpus is data, not logic: it ships as a JSON resource
// that the chat bridge and the typing banner both read from. A built-in
// default is embedded; `--profile <path>` swaps it out wholesale.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const DEFAULT_PROFILE: &str = include_str!("../assets/default_profile.json");

/// Errors raised while loading a profile resource
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse profile '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Portfolio data injected into the banner and the chat bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name of the portfolio owner
    pub owner: String,
    /// Role titles cycled by the typing banner
    pub roles: Vec<String>,
    /// Opening assistant transcript entry
    pub greeting: String,
    /// Resume + project text handed to the generation API with every question
    pub corpus: String,
}

impl Profile {
    /// The embedded default profile.
    pub fn builtin() -> Self {
        serde_json::from_str(DEFAULT_PROFILE).expect("embedded default profile is valid JSON")
    }

    /// Load a profile from a JSON file, or the built-in default when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ProfileError> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Self::builtin()),
        };

        let raw = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Compose the full prompt for one question: the corpus followed by the
    /// framing line that pins the assistant to the owner's portfolio.
    pub fn compose_prompt(&self, question: &str) -> String {
        format!(
            "{}\n\nBased on the information above, answer the following question as {}'s helpful AI assistant: \"{}\"",
            self.corpus, self.owner, question
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_profile_parses() {
        let profile = Profile::builtin();
        assert!(!profile.owner.is_empty());
        assert!(!profile.roles.is_empty());
        assert!(profile.corpus.contains("RESUME"));
        assert!(profile.greeting.contains(&profile.owner));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let profile = Profile::load(None).unwrap();
        assert_eq!(profile, Profile::builtin());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"owner": "A", "roles": ["R"], "greeting": "hi", "corpus": "facts"}}"#
        )
        .unwrap();

        let profile = Profile::load(Some(file.path())).unwrap();
        assert_eq!(profile.owner, "A");
        assert_eq!(profile.roles, vec!["R"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Profile::load(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(ProfileError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Profile::load(Some(file.path()));
        assert!(matches!(result, Err(ProfileError::Parse { .. })));
    }

    #[test]
    fn test_compose_prompt_frames_the_question() {
        let profile = Profile::builtin();
        let prompt = profile.compose_prompt("What do you do?");

        assert!(prompt.starts_with(&profile.corpus));
        assert!(prompt.contains("Based on the information above"));
        assert!(prompt.contains(&profile.owner));
        assert!(prompt.ends_with("\"What do you do?\""));
    }
}
