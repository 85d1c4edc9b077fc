use std::fmt;
use std::fmt::{Display, Formatter};

pub const USER_NOT_FOUND: &str = "User not found.";
pub const BOOK_NOT_FOUND: &str = "Book not found.";
pub const BOOK_NOT_AVAILABLE: &str = "Book not available.";
pub const BOOK_NOT_BORROWED: &str = "You did not borrow this book.";

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // Container index misuse; the menu never reaches this.
    OutOfRange {
        index: usize,
        size: usize,
    },
    UserNotFound {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    // The book is currently held by a patron.
    Unavailable {
        message: String,
    },
    // The patron does not hold a book with the requested isbn.
    NotBorrowed {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn out_of_range(index: usize, size: usize) -> LibraryError {
        LibraryError::OutOfRange { index, size }
    }

    pub fn user_not_found() -> LibraryError {
        LibraryError::UserNotFound { message: USER_NOT_FOUND.to_string() }
    }

    pub fn book_not_found() -> LibraryError {
        LibraryError::BookNotFound { message: BOOK_NOT_FOUND.to_string() }
    }

    pub fn unavailable() -> LibraryError {
        LibraryError::Unavailable { message: BOOK_NOT_AVAILABLE.to_string() }
    }

    pub fn not_borrowed() -> LibraryError {
        LibraryError::NotBorrowed { message: BOOK_NOT_BORROWED.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::UserNotFound { .. } | LibraryError::BookNotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::OutOfRange { index, size } => {
                write!(f, "Index out of bounds: {} >= {}", index, size)
            }
            LibraryError::UserNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Unavailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog and patron operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
