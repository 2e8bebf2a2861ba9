use spdx_sbom::prelude::*;
use std::path::Path;

/// Mock ExclusionListReader returning a fixed list, or `None` for a missing file
#[derive(Default, Clone)]
pub struct MockExclusionListReader {
    keys: Option<Vec<String>>,
}

impl MockExclusionListReader {
    pub fn new(keys: &[&str]) -> Self {
        Self {
            keys: Some(keys.iter().map(|k| k.to_string()).collect()),
        }
    }

    pub fn missing() -> Self {
        Self { keys: None }
    }
}

impl ExclusionListReader for MockExclusionListReader {
    fn read_exclusions(&self, _path: &Path) -> Result<Option<Vec<String>>> {
        Ok(self.keys.clone())
    }
}
