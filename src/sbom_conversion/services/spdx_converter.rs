use super::component_mapper::ComponentMapper;
use super::relationship_builder::{RelationshipBuilder, RelationshipStats};
use super::spdx_id_generator::SpdxIdGenerator;
use crate::sbom_conversion::domain::{
    CreationInfo, CycloneDxBom, DependencyEdge, ProjectContext, SbomMetadata, SpdxDocument,
    SpdxPackage, DATA_LICENSE, DOCUMENT_SPDX_ID, NO_ASSERTION, SPDX_VERSION,
};
use crate::sbom_conversion::policies::SupplierResolution;
use serde_json::Map;

/// Counters describing one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub component_count: usize,
    /// Packages in the document, the application package included
    pub package_count: usize,
    pub relationship_count: usize,
    pub dependency_edge_count: usize,
    pub unresolved_edges: usize,
    pub unresolved_bom_refs: usize,
    /// Components sharing a `name@version` key with an earlier one
    pub duplicate_component_keys: usize,
}

/// SpdxConverter assembles an SPDX document from CycloneDX input
///
/// Packages come out in input order after the application package.
/// Relationships start with DESCRIBES, followed by the edge list and then
/// the CycloneDX bom-ref graph.
pub struct SpdxConverter<'a> {
    context: &'a ProjectContext,
    metadata: &'a SbomMetadata,
    application_id: String,
}

impl<'a> SpdxConverter<'a> {
    pub fn new(context: &'a ProjectContext, metadata: &'a SbomMetadata) -> Self {
        Self {
            context,
            metadata,
            application_id: SpdxIdGenerator::application_id(&context.project_uuid),
        }
    }

    /// Overrides the generated application package ID
    pub fn with_application_id(mut self, application_id: String) -> Self {
        self.application_id = application_id;
        self
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn convert(
        &self,
        bom: &CycloneDxBom,
        edges: &[DependencyEdge],
    ) -> (SpdxDocument, ConversionStats) {
        self.convert_with_progress(bom, edges, |_, _| {})
    }

    /// Converts, calling `on_component(done, total)` after each component
    pub fn convert_with_progress<F>(
        &self,
        bom: &CycloneDxBom,
        edges: &[DependencyEdge],
        mut on_component: F,
    ) -> (SpdxDocument, ConversionStats)
    where
        F: FnMut(usize, usize),
    {
        let components = bom.effective_components();

        let mut mapper = ComponentMapper::new(SpdxIdGenerator::new([self.application_id.as_str()]));
        if let Some(root) = bom.root_bom_ref() {
            mapper.alias_bom_ref(root, &self.application_id);
        }
        for (i, component) in components.iter().enumerate() {
            mapper.map_component(component);
            on_component(i + 1, components.len());
        }
        let (mapping, _generator) = mapper.finish();

        let mut builder = RelationshipBuilder::new(&self.application_id, &mapping);
        builder.add_dependency_edges(edges);
        builder.add_bom_graph(bom);
        let (relationships, relationship_stats) = builder.build();

        let duplicate_component_keys = mapping.duplicate_keys();
        let mut packages = Vec::with_capacity(mapping.packages.len() + 1);
        packages.push(self.application_package());
        packages.extend(mapping.packages);

        let stats = self.stats(
            components.len(),
            edges.len(),
            packages.len(),
            relationships.len(),
            relationship_stats,
            duplicate_component_keys,
        );

        let document = SpdxDocument {
            spdx_id: DOCUMENT_SPDX_ID.to_string(),
            spdx_version: SPDX_VERSION.to_string(),
            creation_info: self.creation_info(),
            name: self.context.document_name(),
            data_license: DATA_LICENSE.to_string(),
            document_namespace: format!(
                "{}/{}",
                self.context.namespace_base,
                self.metadata.document_uuid()
            ),
            document_describes: vec![self.application_id.clone()],
            packages,
            relationships,
            extra: Map::new(),
        };

        (document, stats)
    }

    fn creation_info(&self) -> CreationInfo {
        let mut creators = Vec::new();
        if let Some(org) = &self.context.organization {
            creators.push(format!("Organization: {}", org));
        }
        creators.push(self.metadata.tool_creator());
        if let Some(email) = &self.context.person_email {
            creators.push(format!("Person: {}", email));
        }

        CreationInfo {
            created: self.metadata.timestamp().to_string(),
            creators,
            extra: Map::new(),
        }
    }

    fn application_package(&self) -> SpdxPackage {
        SpdxPackage {
            spdx_id: self.application_id.clone(),
            name: self.context.application_name(),
            version_info: Some(self.context.application_version.clone()),
            supplier: Some(SupplierResolution::format_organization(
                self.context.organization.as_deref(),
            )),
            download_location: NO_ASSERTION.to_string(),
            license_concluded: Some(NO_ASSERTION.to_string()),
            license_declared: Some(NO_ASSERTION.to_string()),
            extra: Map::new(),
        }
    }

    fn stats(
        &self,
        component_count: usize,
        dependency_edge_count: usize,
        package_count: usize,
        relationship_count: usize,
        relationship_stats: RelationshipStats,
        duplicate_component_keys: usize,
    ) -> ConversionStats {
        ConversionStats {
            component_count,
            package_count,
            relationship_count,
            dependency_edge_count,
            unresolved_edges: relationship_stats.unresolved_edges,
            unresolved_bom_refs: relationship_stats.unresolved_bom_refs,
            duplicate_component_keys,
        }
    }
}
