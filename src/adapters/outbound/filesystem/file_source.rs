use crate::ports::outbound::SbomSource;
use crate::shared::error::SbomError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemSource adapter serving input documents from local files
///
/// Each input is an optional path; asking for an input that was not
/// configured is a validation error, except for the edge list, which is
/// optional by contract.
#[derive(Debug, Clone, Default)]
pub struct FileSystemSource {
    cyclonedx_path: Option<PathBuf>,
    dependencies_path: Option<PathBuf>,
    spdx_path: Option<PathBuf>,
}

impl FileSystemSource {
    /// Source for a conversion: a CycloneDX file and an optional edge list
    pub fn for_conversion(cyclonedx_path: PathBuf, dependencies_path: Option<PathBuf>) -> Self {
        Self {
            cyclonedx_path: Some(cyclonedx_path),
            dependencies_path,
            spdx_path: None,
        }
    }

    /// Source for pruning an existing SPDX file
    pub fn for_pruning(spdx_path: PathBuf) -> Self {
        Self {
            spdx_path: Some(spdx_path),
            ..Self::default()
        }
    }

    fn read_input(path: &Path, description: &str, flag: &str) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "The {} does not exist. Please check the path given with {}.",
                    description, flag
                ),
            }
            .into());
        }

        read_regular_file(path, description).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn not_configured(description: &str) -> anyhow::Error {
        SbomError::Validation {
            message: format!("no {} path configured", description),
        }
        .into()
    }
}

impl SbomSource for FileSystemSource {
    fn fetch_cyclonedx(&self) -> Result<String> {
        let path = self
            .cyclonedx_path
            .as_deref()
            .ok_or_else(|| Self::not_configured("CycloneDX document"))?;
        Self::read_input(path, "CycloneDX document", "--cyclonedx")
    }

    fn fetch_dependency_edges(&self) -> Result<Option<String>> {
        self.dependencies_path
            .as_deref()
            .map(|path| Self::read_input(path, "dependency edge list", "--dependencies"))
            .transpose()
    }

    fn fetch_spdx(&self) -> Result<String> {
        let path = self
            .spdx_path
            .as_deref()
            .ok_or_else(|| Self::not_configured("SPDX document"))?;
        Self::read_input(path, "SPDX document", "--spdx")
    }
}
