use std::io;

/// Failures reported inline while listing. Neither aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Error reading directory: {path}: {source}")]
    ReadDir { path: String, source: io::Error },

    #[error("Error getting file info: {path}: {source}")]
    Metadata { path: String, source: io::Error },
}

impl ListError {
    pub fn path(&self) -> &str {
        match self {
            ListError::ReadDir { path, .. } | ListError::Metadata { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_fixed_labels() {
        let err = ListError::ReadDir {
            path: "/nope".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Error reading directory: /nope: not found");
        assert_eq!(err.path(), "/nope");

        let err = ListError::Metadata {
            path: "./gone".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "vanished"),
        };
        assert_eq!(err.to_string(), "Error getting file info: ./gone: vanished");
    }
}
