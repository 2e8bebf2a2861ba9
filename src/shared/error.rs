use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The document was written successfully
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed input, file I/O error, integrity failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM conversion and pruning.
///
/// Structural problems with an input document are fatal and surface here.
/// Missing optional fields never do; those are resolved with sentinels.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to parse CycloneDX document\nDetails: {details}\n\n💡 Hint: The input must be a CycloneDX JSON document or an export envelope with a 'spec.data' string")]
    CycloneDxParseError { details: String },

    #[error("Failed to parse dependency edge list\nDetails: {details}\n\n💡 Hint: The input must be a JSON array of objects with at least a 'name' field")]
    DependencyEdgeParseError { details: String },

    #[error("Failed to parse SPDX document\nDetails: {details}\n\n💡 Hint: Please verify that the input is an SPDX 2.3 JSON document")]
    SpdxParseError { details: String },

    #[error("Invalid exclusion key: '{key}'\nReason: {reason}")]
    InvalidExclusionKey { key: String, reason: String },

    #[error("SPDX document failed the referential integrity check\nDetails: {details}")]
    IntegrityViolation { details: String },

    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for request parameters
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_cyclonedx_parse_error_display() {
        let error = SbomError::CycloneDxParseError {
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse CycloneDX document"));
        assert!(display.contains("expected value at line 1 column 1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_spdx_parse_error_display() {
        let error = SbomError::SpdxParseError {
            details: "missing field `SPDXID`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SPDX document"));
        assert!(display.contains("missing field `SPDXID`"));
    }

    #[test]
    fn test_invalid_exclusion_key_display() {
        let error = SbomError::InvalidExclusionKey {
            key: "".to_string(),
            reason: "Exclusion key cannot be empty".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid exclusion key"));
        assert!(display.contains("cannot be empty"));
    }

    #[test]
    fn test_input_not_found_display() {
        let error = SbomError::InputNotFound {
            path: PathBuf::from("/test/cyclonedx.json"),
            suggestion: "Check the --cyclonedx path".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Input file not found"));
        assert!(display.contains("/test/cyclonedx.json"));
        assert!(display.contains("Check the --cyclonedx path"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_integrity_violation_display() {
        let error = SbomError::IntegrityViolation {
            details: "relationship references SPDXRef-Package-missing".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("referential integrity"));
        assert!(display.contains("SPDXRef-Package-missing"));
    }
}
