use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Document access error (unreadable or unsupported document)
    Document(String),
    /// A batch of edits was rejected as a whole
    Edit(String),
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MdtocError::Document(msg) => write!(f, "Document error: {}", msg),
            MdtocError::Edit(msg) => write!(f, "Edit rejected: {}", msg),
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}
