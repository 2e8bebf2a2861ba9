/// SbomMetadata value object carrying per-run document metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    document_uuid: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        document_uuid: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            document_uuid,
        }
    }

    /// Creation time, `%Y-%m-%dT%H:%M:%SZ` in UTC
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn document_uuid(&self) -> &str {
        &self.document_uuid
    }

    /// SPDX creator entry for this tool, e.g. `Tool: spdx-sbom-0.1.0`
    pub fn tool_creator(&self) -> String {
        format!("Tool: {}-{}", self.tool_name, self.tool_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "spdx-sbom".to_string(),
            "0.1.0".to_string(),
            "6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "spdx-sbom");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(
            metadata.document_uuid(),
            "6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33"
        );
        assert_eq!(metadata.tool_creator(), "Tool: spdx-sbom-0.1.0");
    }
}
