use crate::sbom_conversion::domain::SpdxDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing an SPDX document
pub trait SbomFormatter {
    /// Serializes the document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SpdxDocument) -> Result<String>;
}
