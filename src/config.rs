//! Converter configuration.

/// Label used in validation messages when a check names none.
pub const DEFAULT_ERROR_LABEL: &str = "number";

/// Configuration of a [`NatConverter`](crate::NatConverter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Whether natural-number preconditions are enforced
    pub safe_mode: bool,
    /// Fallback label for validation messages
    pub error_label: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            safe_mode: true,
            error_label: DEFAULT_ERROR_LABEL.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable precondition checks
    pub fn with_safe_mode(mut self, safe_mode: bool) -> Self {
        self.safe_mode = safe_mode;
        self
    }

    /// Set the fallback label for validation messages
    pub fn with_error_label(mut self, label: impl Into<String>) -> Self {
        self.error_label = label.into();
        self
    }
}
