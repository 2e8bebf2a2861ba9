/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the conversion core uses
/// to interact with external systems (file system, console, etc.).
pub mod exclusion_list_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_source;

pub use exclusion_list_reader::ExclusionListReader;
pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_source::SbomSource;
