use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::ports::outbound::{ProgressReporter, SbomSource};
use crate::sbom_conversion::domain::{CycloneDxBom, DependencyEdge, SpdxDocument};
use crate::sbom_conversion::services::{ConversionStats, MetadataGenerator, SpdxConverter};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ConvertSbomUseCase - Converts a CycloneDX document into an SPDX 2.3 document
///
/// # Type Parameters
/// * `S` - SbomSource implementation providing the raw input documents
/// * `PR` - ProgressReporter implementation
pub struct ConvertSbomUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> ConvertSbomUseCase<S, PR>
where
    S: SbomSource,
    PR: ProgressReporter,
{
    /// Creates a new ConvertSbomUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// Returns an error if an input cannot be fetched or parsed, or if the
    /// assembled document fails the referential integrity check. No partial
    /// document is returned.
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        // Step 1: Load inputs
        let bom = self.load_cyclonedx()?;
        let edges = self.load_dependency_edges()?;

        // Step 2: Convert
        let metadata = MetadataGenerator::generate_default_metadata();
        let mut converter = SpdxConverter::new(&request.context, &metadata);
        if let Some(application_id) = request.application_id.clone() {
            converter = converter.with_application_id(application_id);
        }

        self.progress_reporter
            .report("🔄 Mapping components to SPDX packages...");
        let (document, stats) = converter.convert_with_progress(&bom, &edges, |done, total| {
            self.progress_reporter.report_progress(done, total, None)
        });

        // Step 3: Report and verify
        self.report_stats(&stats);
        Self::verify_integrity(&document)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Converted {} component(s) into an SPDX 2.3 document",
            stats.component_count
        ));
        Ok(ConvertResponse::new(document, stats, metadata))
    }

    fn load_cyclonedx(&self) -> Result<CycloneDxBom> {
        self.progress_reporter
            .report("📖 Loading CycloneDX document...");

        let raw = self.source.fetch_cyclonedx()?;
        let bom = CycloneDxBom::from_json(&raw)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            bom.effective_components().len()
        ));
        Ok(bom)
    }

    fn load_dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        let Some(raw) = self.source.fetch_dependency_edges()? else {
            self.progress_reporter.report(
                "ℹ️  No dependency edge list supplied; using the CycloneDX dependency graph only",
            );
            return Ok(Vec::new());
        };

        let edges = DependencyEdge::parse_list(&raw)?;
        let direct = edges.iter().filter(|e| e.is_root_level()).count();

        self.progress_reporter.report(&format!(
            "✅ Loaded {} dependency edge(s) ({} direct)",
            edges.len(),
            direct
        ));
        Ok(edges)
    }

    fn report_stats(&self, stats: &ConversionStats) {
        self.progress_reporter.report(&format!(
            "   - Packages: {} (including the application package)",
            stats.package_count
        ));
        self.progress_reporter
            .report(&format!("   - Relationships: {}", stats.relationship_count));

        if stats.unresolved_edges > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} dependency edge(s) referenced packages missing from the CycloneDX document and were skipped.",
                stats.unresolved_edges
            ));
        }
        if stats.unresolved_bom_refs > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} CycloneDX dependency reference(s) could not be resolved and were skipped.",
                stats.unresolved_bom_refs
            ));
        }
        if stats.duplicate_component_keys > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} component(s) repeat an earlier name@version; relationships resolve to the first one.",
                stats.duplicate_component_keys
            ));
        }
    }

    fn verify_integrity(document: &SpdxDocument) -> Result<()> {
        let problems = document.dangling_references();
        if problems.is_empty() {
            return Ok(());
        }

        Err(SbomError::IntegrityViolation {
            details: problems.join("\n"),
        }
        .into())
    }
}
