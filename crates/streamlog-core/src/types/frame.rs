//! Caller attribution types

/// Name reported when stack introspection yields nothing usable
pub const UNAVAILABLE: &str = "unavailable";

/// One resolved call-stack frame outside the logging facility
///
/// `file` and `line` are left unset when the frame suppressed its own
/// location or when debug info is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerFrame {
    /// Defining name: `Type::function` for calls through an owning type,
    /// bare `function` otherwise
    pub name: String,
    /// Source file of the call site
    pub file: Option<String>,
    /// Source line of the call site
    pub line: Option<u32>,
}

impl CallerFrame {
    /// Create a frame with a name and no location
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
            line: None,
        }
    }

    /// Set the source location
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// Synthetic frame used when no external frame can be resolved
    pub fn unavailable() -> Self {
        Self::new(UNAVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_frame_has_no_location() {
        let frame = CallerFrame::unavailable();
        assert_eq!(frame.name, UNAVAILABLE);
        assert!(frame.file.is_none());
        assert!(frame.line.is_none());
    }

    #[test]
    fn test_with_location() {
        let frame = CallerFrame::new("handler").with_location("src/handler.rs", 42);
        assert_eq!(frame.file.as_deref(), Some("src/handler.rs"));
        assert_eq!(frame.line, Some(42));
    }
}
