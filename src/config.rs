//! Recruiter settings
//!
//! Settings come from the process environment. A `.env` file in the working
//! directory is loaded first when present, without overriding variables that
//! are already set.

use std::sync::OnceLock;

/// Environment variable holding the OpenAI credential
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Settings shared by every recruitment run
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RecruiterSettings {
    /// API key handed to the model provider; empty when unset
    pub openai_api_key: String,
}

impl RecruiterSettings {
    pub fn new(openai_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
        }
    }

    /// Load `.env` if present, then read the environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup(OPENAI_API_KEY_VAR).unwrap_or_default();
        if openai_api_key.is_empty() {
            tracing::warn!("{} is not set; requests will go out without a credential", OPENAI_API_KEY_VAR);
        }

        Self { openai_api_key }
    }

    /// Settings loaded from the environment on first use and cached for the
    /// rest of the process
    pub fn global() -> &'static RecruiterSettings {
        static SETTINGS: OnceLock<RecruiterSettings> = OnceLock::new();
        SETTINGS.get_or_init(Self::from_env)
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

impl std::fmt::Debug for RecruiterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecruiterSettings")
            .field(
                "openai_api_key",
                &if self.has_api_key() { "<redacted>" } else { "<unset>" },
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_vars_reads_api_key() {
        let vars = HashMap::from([(OPENAI_API_KEY_VAR, "sk-test")]);
        let settings = RecruiterSettings::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.openai_api_key, "sk-test");
        assert!(settings.has_api_key());
    }

    #[test]
    fn test_missing_api_key_is_empty() {
        let settings = RecruiterSettings::from_vars(|_| None);

        assert_eq!(settings.openai_api_key, "");
        assert!(!settings.has_api_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", RecruiterSettings::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_global_is_cached() {
        let first = RecruiterSettings::global();
        let second = RecruiterSettings::global();
        assert!(std::ptr::eq(first, second));
    }
}
