use crate::application::dto::{PruneRequest, PruneResponse};
use crate::ports::outbound::{ExclusionListReader, ProgressReporter, SbomSource};
use crate::sbom_conversion::domain::SpdxDocument;
use crate::sbom_conversion::services::{DependencyPruner, MetadataGenerator, PruneReport};
use crate::shared::Result;
use chrono::Utc;

/// PruneDependenciesUseCase - Removes excluded packages from an SPDX document
///
/// # Type Parameters
/// * `S` - SbomSource implementation providing the SPDX document
/// * `ER` - ExclusionListReader implementation
/// * `PR` - ProgressReporter implementation
pub struct PruneDependenciesUseCase<S, ER, PR> {
    source: S,
    exclusion_reader: ER,
    progress_reporter: PR,
}

impl<S, ER, PR> PruneDependenciesUseCase<S, ER, PR>
where
    S: SbomSource,
    ER: ExclusionListReader,
    PR: ProgressReporter,
{
    /// Creates a new PruneDependenciesUseCase with injected dependencies
    pub fn new(source: S, exclusion_reader: ER, progress_reporter: PR) -> Self {
        Self {
            source,
            exclusion_reader,
            progress_reporter,
        }
    }

    /// Executes the prune
    ///
    /// An empty exclusion set is not an error: the document comes back
    /// unchanged, metadata included.
    ///
    /// # Errors
    /// Returns an error if an exclusion key is invalid, the exclusion list
    /// cannot be read, or the SPDX document cannot be fetched or parsed.
    pub fn execute(&self, request: PruneRequest) -> Result<PruneResponse> {
        // Step 1: Collect exclusion keys
        let keys = self.collect_exclusion_keys(&request)?;
        let pruner = DependencyPruner::new(keys)?;

        // Step 2: Load the document
        let original = self.load_spdx()?;

        if pruner.is_empty() {
            self.progress_reporter
                .report("ℹ️  No exclusion keys given; the document is left unchanged");
            return Ok(PruneResponse::new(
                original.clone(),
                original,
                PruneReport::default(),
            ));
        }

        // Step 3: Prune
        self.progress_reporter.report(&format!(
            "🚫 Removing dependencies matching {} exclusion key(s)...",
            pruner.len()
        ));
        let (document, report) = pruner.prune(
            original.clone(),
            &MetadataGenerator::timestamp(Utc::now()),
            &MetadataGenerator::prune_tool_creator(),
        );

        self.report_outcome(&document, &report);
        self.progress_reporter
            .report_completion("✅ Pruning complete; remaining relationships are referentially intact");
        Ok(PruneResponse::new(original, document, report))
    }

    fn collect_exclusion_keys(&self, request: &PruneRequest) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        if let Some(path) = &request.exclusion_file {
            match self.exclusion_reader.read_exclusions(path)? {
                Some(from_file) => {
                    self.progress_reporter.report(&format!(
                        "📋 Loaded {} exclusion key(s) from {}",
                        from_file.len(),
                        path.display()
                    ));
                    keys.extend(from_file);
                }
                None => self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: {} not found. No dependencies will be removed based on it.",
                    path.display()
                )),
            }
        }

        keys.extend(request.exclusion_keys.iter().cloned());
        Ok(keys)
    }

    fn load_spdx(&self) -> Result<SpdxDocument> {
        self.progress_reporter.report("📖 Loading SPDX document...");

        let raw = self.source.fetch_spdx()?;
        let document = SpdxDocument::from_json(&raw)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) and {} relationship(s)",
            document.packages.len(),
            document.relationships.len()
        ));
        Ok(document)
    }

    fn report_outcome(&self, document: &SpdxDocument, report: &PruneReport) {
        for removed in &report.removed_packages {
            self.progress_reporter.report(&format!(
                "   - Removed {}@{} ({})",
                removed.name, removed.version, removed.spdx_id
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Removed {} package(s) and {} relationship(s)",
            report.removed_packages.len(),
            report.removed_relationships
        ));
        if report.dangling_relationships > 0 {
            self.progress_reporter.report(&format!(
                "   - Dropped {} relationship(s) referencing elements not in the document",
                report.dangling_relationships
            ));
        }
        self.progress_reporter.report(&format!(
            "   - Remaining: {} package(s), {} relationship(s)",
            document.packages.len(),
            document.relationships.len()
        ));

        for key in &report.unmatched_keys {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Exclusion key '{}' did not match any package.",
                key
            ));
        }
    }
}
