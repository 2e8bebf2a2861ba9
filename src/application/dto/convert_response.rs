use crate::sbom_conversion::domain::{SbomMetadata, SpdxDocument};
use crate::sbom_conversion::services::ConversionStats;

/// ConvertResponse - Response DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    pub document: SpdxDocument,
    pub stats: ConversionStats,
    pub metadata: SbomMetadata,
}

impl ConvertResponse {
    pub fn new(document: SpdxDocument, stats: ConversionStats, metadata: SbomMetadata) -> Self {
        Self {
            document,
            stats,
            metadata,
        }
    }
}
