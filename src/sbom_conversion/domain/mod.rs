pub mod component;
pub mod dependency_edge;
mod nullable;
pub mod project_context;
pub mod sbom_metadata;
pub mod spdx_document;

pub use component::{
    BomDependency, BomMetadata, Component, ComponentDependency, CycloneDxBom, ExternalReference,
    LicenseChoice, LicenseEntry, Supplier,
};
pub use dependency_edge::DependencyEdge;
pub use project_context::ProjectContext;
pub use sbom_metadata::SbomMetadata;
pub use spdx_document::{
    CreationInfo, RelationshipType, SpdxDocument, SpdxPackage, SpdxRelationship, DATA_LICENSE,
    DOCUMENT_SPDX_ID, NO_ASSERTION, SPDX_VERSION,
};
