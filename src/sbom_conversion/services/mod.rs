mod component_mapper;
mod dependency_pruner;
mod metadata_generator;
mod relationship_builder;
mod spdx_converter;
mod spdx_id_generator;

pub use component_mapper::{
    ComponentMapper, ComponentMapping, DEFAULT_COMPONENT_NAME, DEFAULT_COMPONENT_VERSION,
};
pub use dependency_pruner::{DependencyPruner, PruneReport, RemovedPackage};
pub use metadata_generator::{MetadataGenerator, PRUNE_TOOL_NAME, TIMESTAMP_FORMAT, TOOL_NAME};
pub use relationship_builder::{RelationshipBuilder, RelationshipStats};
pub use spdx_converter::{ConversionStats, SpdxConverter};
pub use spdx_id_generator::{sanitize, SpdxIdGenerator};
