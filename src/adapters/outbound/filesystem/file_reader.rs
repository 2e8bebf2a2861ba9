use crate::ports::outbound::ExclusionListReader;
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for plain-text exclusion lists
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ExclusionListReader for FileSystemReader {
    fn read_exclusions(&self, path: &Path) -> Result<Option<Vec<String>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = read_regular_file(path, "exclusion list").map_err(|e| {
            anyhow::Error::from(SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })
        })?;

        Ok(Some(parse_exclusion_list(&content)))
    }
}

/// Extracts keys from exclusion list text
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn parse_exclusion_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_exclusion_list() {
        let content = "# test-only packages\npytest\n\n  coverage@7.4.0  \n#mypy\n\t\nruff\n";
        assert_eq!(
            parse_exclusion_list(content),
            vec!["pytest", "coverage@7.4.0", "ruff"]
        );
    }

    #[test]
    fn test_parse_exclusion_list_crlf() {
        assert_eq!(parse_exclusion_list("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_exclusion_list_empty() {
        assert!(parse_exclusion_list("").is_empty());
        assert!(parse_exclusion_list("# only comments\n\n").is_empty());
    }

    #[test]
    fn test_read_exclusions_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_dependencies.txt");
        fs::write(&path, "pytest\nblack@24.1.0\n").unwrap();

        let keys = FileSystemReader::new().read_exclusions(&path).unwrap();
        assert_eq!(
            keys,
            Some(vec!["pytest".to_string(), "black@24.1.0".to_string()])
        );
    }

    #[test]
    fn test_read_exclusions_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");

        assert_eq!(FileSystemReader::new().read_exclusions(&path).unwrap(), None);
    }

    #[test]
    fn test_read_exclusions_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_exclusions(temp_dir.path());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }
}
