// ============================================================================
// Reader Configuration
// How raw text lines are turned into certified decimals
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Invalid Line Policy
// ============================================================================

/// What the reader does with a line that fails the decimal grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidLinePolicy {
    /// Record the line as rejected and keep reading
    #[default]
    Skip,

    /// Stop at the first invalid line and return an error
    Fail,
}

// ============================================================================
// Complete Reader Configuration
// ============================================================================

/// Configuration for the decimal reader
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// Trim surrounding whitespace before validation.
    /// The grammar itself never trims, so `" 1"` is invalid unless this is set.
    pub trim_whitespace: bool,

    /// Ignore lines that are empty (after trimming, if enabled)
    pub skip_blank_lines: bool,

    /// Optional: Ignore lines starting with this prefix (e.g. `"#"`)
    pub comment_prefix: Option<String>,

    /// Handling of lines that fail validation
    pub invalid_line_policy: InvalidLinePolicy,
}

impl Default for ReaderConfig {
    /// Every line is validated verbatim; invalid lines are reported and skipped
    fn default() -> Self {
        Self {
            trim_whitespace: false,
            skip_blank_lines: false,
            comment_prefix: None,
            invalid_line_policy: InvalidLinePolicy::Skip,
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Trim whitespace before validation
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Builder method: Ignore blank lines
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Builder method: Set comment prefix
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    /// Builder method: Set invalid line policy
    pub fn with_invalid_line_policy(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_line_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.comment_prefix {
            if prefix.is_empty() {
                return Err("Comment prefix cannot be empty".to_string());
            }

            // A prefix that can start a decimal would swallow valid numbers
            if prefix.starts_with(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
                return Err(format!(
                    "Comment prefix {:?} cannot start with a digit or sign",
                    prefix
                ));
            }

            if self.trim_whitespace && prefix.starts_with(char::is_whitespace) {
                return Err("Comment prefix cannot start with whitespace when trimming".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ReaderConfig {
    /// Strict configuration
    /// - No trimming, nothing ignored
    /// - First invalid line is an error
    pub fn strict() -> Self {
        Self::new().with_invalid_line_policy(InvalidLinePolicy::Fail)
    }

    /// Lenient configuration for hand-edited files
    /// - Whitespace trimmed, blank lines and `#` comments ignored
    /// - Invalid lines reported and skipped
    pub fn lenient() -> Self {
        Self::new()
            .with_trim_whitespace(true)
            .with_skip_blank_lines(true)
            .with_comment_prefix("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert!(!config.trim_whitespace);
        assert!(!config.skip_blank_lines);
        assert_eq!(config.comment_prefix, None);
        assert_eq!(config.invalid_line_policy, InvalidLinePolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReaderConfig::new()
            .with_comment_prefix("//")
            .with_skip_blank_lines(true);

        assert_eq!(config.comment_prefix.as_deref(), Some("//"));
        assert!(config.skip_blank_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(ReaderConfig::new().with_comment_prefix("").validate().is_err());
        assert!(ReaderConfig::new().with_comment_prefix("-").validate().is_err());
        assert!(ReaderConfig::new().with_comment_prefix("0x").validate().is_err());
        assert!(ReaderConfig::new()
            .with_trim_whitespace(true)
            .with_comment_prefix(" #")
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let strict = ReaderConfig::strict();
        assert_eq!(strict.invalid_line_policy, InvalidLinePolicy::Fail);
        assert!(strict.validate().is_ok());

        let lenient = ReaderConfig::lenient();
        assert!(lenient.trim_whitespace);
        assert_eq!(lenient.comment_prefix.as_deref(), Some("#"));
        assert!(lenient.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = ReaderConfig::lenient();
        let json = serde_json::to_string(&config).unwrap();
        let back: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
