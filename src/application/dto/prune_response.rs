use crate::sbom_conversion::domain::SpdxDocument;
use crate::sbom_conversion::services::PruneReport;

/// PruneResponse - Response DTO for the prune use case
///
/// Carries the document as it was read alongside the pruned one, so callers
/// can keep a copy of the unmodified input.
#[derive(Debug, Clone)]
pub struct PruneResponse {
    pub original: SpdxDocument,
    pub document: SpdxDocument,
    pub report: PruneReport,
}

impl PruneResponse {
    pub fn new(original: SpdxDocument, document: SpdxDocument, report: PruneReport) -> Self {
        Self {
            original,
            document,
            report,
        }
    }

    pub fn removed_package_count(&self) -> usize {
        self.original.packages.len() - self.document.packages.len()
    }
}
