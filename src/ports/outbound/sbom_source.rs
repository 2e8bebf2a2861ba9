use crate::shared::Result;

/// SbomSource port for fetching the raw input documents
///
/// The core never talks to an inventory service or the file system directly;
/// it asks this port for the payloads. The filesystem adapter reads
/// configured paths. A remote adapter (with its own authentication, paging
/// and retries) would implement the same trait.
pub trait SbomSource {
    /// Fetches the CycloneDX document as raw JSON
    ///
    /// # Errors
    /// Returns an error if the document cannot be retrieved
    fn fetch_cyclonedx(&self) -> Result<String>;

    /// Fetches the dependency edge list as raw JSON
    ///
    /// # Returns
    /// `None` when no edge list is available; the conversion then relies on
    /// the CycloneDX bom-ref graph alone
    ///
    /// # Errors
    /// Returns an error if an edge list is configured but cannot be retrieved
    fn fetch_dependency_edges(&self) -> Result<Option<String>>;

    /// Fetches an existing SPDX document as raw JSON
    ///
    /// # Errors
    /// Returns an error if the document cannot be retrieved
    fn fetch_spdx(&self) -> Result<String>;
}
