//! Error types surfaced while loading interaction settings.
use std::fmt;

/// Failures while turning `config/interaction.toml` into runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionConfigError {
    /// The configured key name does not map to a supported key code.
    UnknownKey { name: String },
    /// The file exists but is not valid TOML for the expected layout.
    Parse { message: String },
}

impl InteractionConfigError {
    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::UnknownKey { name: name.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl fmt::Display for InteractionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { name } => write!(f, "unknown interact key '{}'", name),
            Self::Parse { message } => write!(f, "invalid interaction config: {}", message),
        }
    }
}

impl std::error::Error for InteractionConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let error = InteractionConfigError::unknown_key("Hyper");
        assert!(error.to_string().contains("Hyper"));

        let error = InteractionConfigError::parse("expected table");
        assert!(matches!(error, InteractionConfigError::Parse { .. }));
        assert!(error.to_string().starts_with("invalid interaction config"));
    }
}
