/// Mock implementations for testing
mod mock_exclusion_list_reader;
mod mock_progress_reporter;
mod mock_sbom_source;

pub use mock_exclusion_list_reader::MockExclusionListReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_source::MockSbomSource;
