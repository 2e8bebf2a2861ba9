use std::path::PathBuf;

/// PruneRequest - Request DTO for removing dependencies from an SPDX document
///
/// Keys from `exclusion_file` and `exclusion_keys` are merged.
#[derive(Debug, Clone, Default)]
pub struct PruneRequest {
    /// Plain-text exclusion list; a missing file only produces a warning
    pub exclusion_file: Option<PathBuf>,
    /// Keys given directly (CLI flags, config file)
    pub exclusion_keys: Vec<String>,
}

impl PruneRequest {
    pub fn new(exclusion_file: Option<PathBuf>, exclusion_keys: Vec<String>) -> Self {
        Self {
            exclusion_file,
            exclusion_keys,
        }
    }
}
