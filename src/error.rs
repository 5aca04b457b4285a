use thiserror::Error;

/// Problems with the caller's input. Raised before any byte of output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("text is missing or empty")]
    /// The text was missing, empty, or only whitespace
    EmptyText,

    #[error("character {character:?} at index {index} cannot be encoded as a single byte")]
    /// The text contains a character outside printable Latin-1
    UnsupportedCharacter { character: char, index: usize },
}

/// Render options that cannot be written into a well-formed file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("{field} {value:?} is not a valid PDF name")]
    /// A font name is empty or contains whitespace, a delimiter, `#`, or non-ASCII
    InvalidName { field: &'static str, value: String },

    #[error("version {0:?} is not of the form `major.minor`")]
    /// The header version is not a single digit, a dot, and a single digit
    InvalidVersion(String),

    #[error("{field} {value} is out of range")]
    /// A size is NaN, infinite, or not positive, or a margin is NaN, infinite, or negative
    InvalidLength { field: &'static str, value: f32 },
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// The input text was rejected
    Validation(#[from] ValidationError),

    #[error(transparent)]
    /// The render options were rejected
    Options(#[from] OptionsError),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("malformed export request: {0}")]
    /// [serde_json] failed to parse the request body
    Request(#[from] serde_json::Error),
}

impl PDFError {
    /// Whether the error was caused by the caller's input rather than by the renderer
    pub fn is_client_error(&self) -> bool {
        matches!(self, PDFError::Validation(_) | PDFError::Request(_))
    }
}
