use crate::ports::outbound::SbomFormatter;
use crate::sbom_conversion::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxJsonFormatter adapter producing pretty-printed SPDX 2.3 JSON
///
/// Top-level keys follow the document model's field order: `SPDXID`,
/// `spdxVersion`, `creationInfo`, `name`, `dataLicense`, `documentNamespace`,
/// `documentDescribes`, `packages`, `relationships`, then any fields carried
/// over from an input document.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &SpdxDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}
