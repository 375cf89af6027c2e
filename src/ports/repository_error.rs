//! Repository error shared by the storage ports.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while reading or writing TLX records
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Duplicate rating id: {0}")]
    DuplicateRating(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::IoError(err.to_string())
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RepositoryError = io.into();
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn maps_to_storage_error_code() {
        let err: DomainError = RepositoryError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn serialization_error_message() {
        let err = RepositoryError::DeserializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
