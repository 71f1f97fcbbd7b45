use thiserror::Error;

/// Positional diagnostic produced while scanning or parsing manifest source.
///
/// `file` is the name handed in by the caller for diagnostics only; the
/// scanner never touches the filesystem. Lines and columns are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}:{line}:{column}: {message}")]
pub struct SyntaxError {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl SyntaxError {
    /// Build a diagnostic anchored at the given position.
    pub fn new(file: &str, line: u32, column: u32, message: String) -> Self {
        SyntaxError {
            file: file.to_string(),
            line,
            column,
            message,
        }
    }
}
