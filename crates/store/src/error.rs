use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("high-score record {path} has {len} bytes, expected 4")]
    HighScoreLen { path: PathBuf, len: usize },

    #[error("failed to parse session from {path}: {source}")]
    SessionParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_len_display() {
        let err = StoreError::HighScoreLen {
            path: PathBuf::from("data/highscore.dat"),
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "high-score record data/highscore.dat has 2 bytes, expected 4"
        );
    }

    #[test]
    fn test_io_error_display_names_the_file() {
        let err = StoreError::Read {
            path: PathBuf::from("session.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read session.json: denied");
    }
}
