use std::fmt;
use std::panic::Location;

/// Source position captured where an error was constructed.
///
/// Every error enum in the workspace carries one of these, filled in via
/// `ErrorLocation::from(Location::caller())` inside a `#[track_caller]`
/// constructor, so log lines point at the call site rather than the
/// conversion helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub file: &'static str,
    pub line: u32,
}

impl From<&'static Location<'static>> for ErrorLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file, self.line)
    }
}
