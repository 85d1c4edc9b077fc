use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
    },
    NotBorrowed {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => message,
            CommandError::Unavailable { message } => message,
            CommandError::NotBorrowed { message } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
            CommandError::Runtime { message, .. } => message,
        }
    }
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::OutOfRange { .. } => {
                CommandError::Runtime { message: other.to_string(), reason_code: None }
            }
            LibraryError::UserNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::BookNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Unavailable { message } => {
                CommandError::Unavailable { message }
            }
            LibraryError::NotBorrowed { message } => {
                CommandError::NotBorrowed { message }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert_eq!(CommandError::NotFound { message: "User not found.".to_string() },
                   CommandError::from(LibraryError::user_not_found()));
        assert_eq!(CommandError::NotFound { message: "Book not found.".to_string() },
                   CommandError::from(LibraryError::book_not_found()));
        assert!(matches!(CommandError::from(LibraryError::unavailable()), CommandError::Unavailable{ .. }));
        assert!(matches!(CommandError::from(LibraryError::not_borrowed()), CommandError::NotBorrowed{ .. }));
        assert!(matches!(CommandError::from(LibraryError::out_of_range(1, 0)), CommandError::Runtime{ .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("k")), CommandError::DuplicateKey{ .. }));
    }

    #[test]
    fn test_should_expose_message() {
        assert_eq!("Book not available.", CommandError::from(LibraryError::unavailable()).message());
        assert_eq!("Index out of bounds: 1 >= 0", CommandError::from(LibraryError::out_of_range(1, 0)).message());
    }
}
