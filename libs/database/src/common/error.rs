/// Unified database error type for connection management
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver error that is not a connectivity problem
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DatabaseError {
    /// Whether retrying the same operation could succeed
    ///
    /// Bad configuration never heals on its own; lost connections might.
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "mongodb")]
            DatabaseError::Mongo(e) => matches!(
                *e.kind,
                mongodb::error::ErrorKind::Io(_)
                    | mongodb::error::ErrorKind::ConnectionPoolCleared { .. }
                    | mongodb::error::ErrorKind::ServerSelection { .. }
            ),
            DatabaseError::ConnectionFailed(_) | DatabaseError::HealthCheckFailed(_) => true,
            DatabaseError::ConfigError(_) => false,
        }
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_not_transient() {
        assert!(!DatabaseError::ConfigError("bad uri".to_string()).is_transient());
    }

    #[test]
    fn test_connection_errors_are_transient() {
        assert!(DatabaseError::ConnectionFailed("refused".to_string()).is_transient());
        assert!(DatabaseError::HealthCheckFailed("timeout".to_string()).is_transient());
    }

    #[test]
    fn test_display_names_the_failure() {
        let err = DatabaseError::ConnectionFailed("no reachable servers".to_string());
        assert_eq!(err.to_string(), "Connection failed: no reachable servers");
    }
}
