//! Report rendering options.

/// Native line terminator of the build platform.
#[cfg(windows)]
pub const NATIVE_NEWLINE: &str = "\r\n";

/// Native line terminator of the build platform.
#[cfg(not(windows))]
pub const NATIVE_NEWLINE: &str = "\n";

/// Options controlling how reports are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Line terminator appended to every emitted line.
    ///
    /// Defaults to the platform's native terminator. Tests that assert on
    /// exact bytes pin this to `"\n"`.
    pub newline: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            newline: NATIVE_NEWLINE.to_string(),
        }
    }
}

impl ReportOptions {
    /// Create options with platform defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the line terminator.
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}
