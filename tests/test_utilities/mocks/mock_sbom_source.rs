use spdx_sbom::prelude::*;

/// Mock SbomSource serving in-memory documents
#[derive(Default, Clone)]
pub struct MockSbomSource {
    cyclonedx: Option<String>,
    dependencies: Option<String>,
    spdx: Option<String>,
}

impl MockSbomSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cyclonedx(mut self, content: &str) -> Self {
        self.cyclonedx = Some(content.to_string());
        self
    }

    pub fn with_dependencies(mut self, content: &str) -> Self {
        self.dependencies = Some(content.to_string());
        self
    }

    pub fn with_spdx(mut self, content: &str) -> Self {
        self.spdx = Some(content.to_string());
        self
    }
}

impl SbomSource for MockSbomSource {
    fn fetch_cyclonedx(&self) -> Result<String> {
        self.cyclonedx
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock source has no CycloneDX document"))
    }

    fn fetch_dependency_edges(&self) -> Result<Option<String>> {
        Ok(self.dependencies.clone())
    }

    fn fetch_spdx(&self) -> Result<String> {
        self.spdx
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock source has no SPDX document"))
    }
}
