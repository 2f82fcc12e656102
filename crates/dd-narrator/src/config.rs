//! Narrator configuration.

/// Default wrap width in columns, including the indent.
pub const DEFAULT_WIDTH: usize = 80;

/// Default paragraph indent.
pub const DEFAULT_INDENT: &str = "    ";

/// Layout settings for rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Maximum line width in columns, including the indent.
    pub width: usize,
    /// Prefix for every wrapped line and bullet.
    pub indent: String,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl NarratorConfig {
    /// Create a config with the default 80-column layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the indent.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
