//! spdx-sbom - CycloneDX to SPDX 2.3 conversion and dependency pruning
//!
//! This library converts CycloneDX JSON SBOMs (plus an optional dependency
//! edge list) into SPDX 2.3 documents, and removes excluded dependencies from
//! existing SPDX documents while keeping them referentially intact. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_conversion`): Document models, field-resolution policies, conversion and pruning services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use spdx_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source = FileSystemSource::for_conversion(
//!     PathBuf::from("cyclonedx.json"),
//!     Some(PathBuf::from("dependencies.json")),
//! );
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ConvertSbomUseCase::new(source, progress_reporter);
//!
//! // Execute
//! let context = ProjectContext::new("acme", "0f3c9a6e-1b2d-4c5e-8f70-123456789abc")
//!     .with_organization(Some("Acme Corp".to_string()));
//! let response = use_case.execute(ConvertRequest::new(context))?;
//!
//! // Format output
//! let formatter = SpdxJsonFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_conversion;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::SpdxJsonFormatter;
    pub use crate::application::dto::{ConvertRequest, ConvertResponse, PruneRequest, PruneResponse};
    pub use crate::application::use_cases::{ConvertSbomUseCase, PruneDependenciesUseCase};
    pub use crate::ports::outbound::{
        ExclusionListReader, OutputPresenter, ProgressReporter, SbomFormatter, SbomSource,
    };
    pub use crate::sbom_conversion::domain::{
        Component, CycloneDxBom, DependencyEdge, ProjectContext, RelationshipType, SbomMetadata,
        SpdxDocument, SpdxPackage, SpdxRelationship, DOCUMENT_SPDX_ID, NO_ASSERTION,
    };
    pub use crate::sbom_conversion::services::{
        ConversionStats, DependencyPruner, MetadataGenerator, PruneReport, SpdxConverter,
        SpdxIdGenerator,
    };
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
