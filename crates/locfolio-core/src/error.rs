//! Error types for the localization portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The data source answered with a non-success status
    #[error("Data source returned status {0}")]
    Status(u16),

    /// The data source could not be reached at all
    #[error("Data source error: {0}")]
    Source(String),

    /// The project data could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference storage error that has no more specific variant
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// A page template lacks an element the page controllers rely on
    #[error("Required element #{0} is missing from the page")]
    MissingElement(&'static str),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Status(500);
        assert_eq!(format!("{}", err), "Data source returned status 500");

        let err = FolioError::MissingElement("projectsGrid");
        assert_eq!(
            format!("{}", err),
            "Required element #projectsGrid is missing from the page"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Parse(_)));
    }
}
