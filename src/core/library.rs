use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;

pub const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Any fault that is not a lookup miss; the underlying cause is kept in the message.
    Unexpected {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn book_not_found() -> LibraryError {
        LibraryError::not_found(BOOK_NOT_FOUND)
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn unexpected(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Unexpected { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Unexpected { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl<T> From<PoisonError<T>> for LibraryError {
    fn from(err: PoisonError<T>) -> Self {
        LibraryError::unexpected(
            format!("lock poisoned {}", err).as_str(), Some("500".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog store.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use crate::core::library::{BOOK_NOT_FOUND, LibraryError, LibraryResult};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
        assert_eq!(BOOK_NOT_FOUND, LibraryError::book_not_found().to_string());
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        let err = serde_json::from_str::<Vec<String>>("{").map_err(LibraryError::from).unwrap_err();
        assert!(matches!(err, LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_unexpected_error() {
        assert!(matches!(LibraryError::unexpected("test", None), LibraryError::Unexpected{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_poisoned_lock() {
        let lock = Arc::new(Mutex::new(0));
        let cloned = lock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison the lock");
        }).join();
        let res: LibraryResult<i32> = lock.lock().map(|v| *v).map_err(LibraryError::from);
        assert!(matches!(res, Err(LibraryError::Unexpected{ message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_display_message_verbatim() {
        assert_eq!("oops", LibraryError::unexpected("oops", Some("500".to_string())).to_string());
        assert_eq!("bad", LibraryError::validation("bad", None).to_string());
    }
}
