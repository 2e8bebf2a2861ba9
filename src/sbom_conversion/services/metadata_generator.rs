use crate::sbom_conversion::domain::SbomMetadata;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Timestamp layout for `creationInfo.created`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Tool name written into the `Tool:` creator entry
pub const TOOL_NAME: &str = "spdx-sbom";

/// Tool name recorded when a document has been pruned
pub const PRUNE_TOOL_NAME: &str = "spdx-sbom-prune";

/// MetadataGenerator service for per-run document metadata
///
/// Pure apart from reading the clock and drawing a v4 UUID.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh document UUID
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        SbomMetadata::new(
            Self::timestamp(Utc::now()),
            tool_name.to_string(),
            tool_version.to_string(),
            Uuid::new_v4().to_string(),
        )
    }

    /// Generates metadata for this binary (name `spdx-sbom`, version from Cargo.toml)
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// Formats a point in time the way SPDX `created` expects it
    pub fn timestamp(at: DateTime<Utc>) -> String {
        at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `Tool:` creator entry stamped onto pruned documents
    pub fn prune_tool_creator() -> String {
        format!("Tool: {}-{}", PRUNE_TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
