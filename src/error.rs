//! Error types for clipreel.

/// Result type alias for clipreel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for clipreel.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Transcript file does not exist.
    #[error("transcript file not found: {path}")]
    TranscriptNotFound {
        /// Path to the missing transcript.
        path: std::path::PathBuf,
    },

    /// Failed to read transcript file.
    #[error("failed to read transcript file '{path}'")]
    TranscriptRead {
        /// Path to the transcript file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A transcript record could not be parsed.
    #[error("malformed transcript record {record}: {reason}")]
    MalformedRecord {
        /// 1-based position of the raw record in the input.
        record: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Invalid highlight timecode string.
    #[error("invalid timecode '{value}': {reason}")]
    InvalidTimecode {
        /// The offending timecode.
        value: String,
        /// Description of the problem.
        reason: String,
    },

    /// Failed to write JSON report.
    #[error("failed to write JSON report")]
    JsonWrite {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write CSV report.
    #[error("failed to write CSV report")]
    CsvWrite {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}
