use super::component_mapper::ComponentMapping;
use crate::sbom_conversion::domain::{
    CycloneDxBom, DependencyEdge, RelationshipType, SpdxRelationship, DOCUMENT_SPDX_ID,
};
use std::collections::HashSet;

/// Counters collected while deriving relationships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipStats {
    /// Edges with a child or parent key missing from the lookup table
    pub unresolved_edges: usize,
    /// bom-refs in the CycloneDX graph that map to no package
    pub unresolved_bom_refs: usize,
    /// Connections suppressed because the directed pair was already emitted
    pub duplicate_connections: usize,
    pub self_edges: usize,
}

/// RelationshipBuilder derives SPDX relationships for one document
///
/// Emits DESCRIBES (document -> application) first. Every accepted connection
/// then contributes a DEPENDS_ON (parent -> child) and DEPENDENCY_OF
/// (child -> parent) pair, in input order. Each directed (parent, child) pair
/// is emitted at most once.
#[derive(Debug)]
pub struct RelationshipBuilder<'a> {
    application_id: String,
    mapping: &'a ComponentMapping,
    relationships: Vec<SpdxRelationship>,
    seen: HashSet<(String, String)>,
    stats: RelationshipStats,
}

impl<'a> RelationshipBuilder<'a> {
    pub fn new(application_id: &str, mapping: &'a ComponentMapping) -> Self {
        Self {
            application_id: application_id.to_string(),
            mapping,
            relationships: vec![SpdxRelationship::new(
                DOCUMENT_SPDX_ID,
                application_id,
                RelationshipType::Describes,
            )],
            seen: HashSet::new(),
            stats: RelationshipStats::default(),
        }
    }

    /// Adds connections from the external dependency edge list
    ///
    /// Root-level edges (direct, or without a parent) hang off the
    /// application. Edges with a resolvable parent also connect parent -> child.
    /// A direct edge is already attached, so its unknown parent is not counted.
    pub fn add_dependency_edges(&mut self, edges: &[DependencyEdge]) {
        let mapping = self.mapping;
        for edge in edges {
            let child = edge.child_key().and_then(|key| mapping.id_for_key(&key));
            let Some(child) = child else {
                self.stats.unresolved_edges += 1;
                continue;
            };

            if edge.is_root_level() {
                let application_id = self.application_id.clone();
                self.connect(&application_id, child);
            }

            if edge.parent.trim().is_empty() {
                continue;
            }

            match edge.parent_key().and_then(|key| mapping.id_for_key(&key)) {
                Some(parent) => self.connect(parent, child),
                None if !edge.is_direct => self.stats.unresolved_edges += 1,
                None => {}
            }
        }
    }

    /// Adds connections from the CycloneDX bom-ref graph
    ///
    /// Reads the document-level `dependencies[{ref, dependsOn}]` list and the
    /// `dependencies[{ref}]` lists embedded in components. The root component's
    /// bom-ref is expected to be aliased to the application already.
    pub fn add_bom_graph(&mut self, bom: &CycloneDxBom) {
        for dependency in &bom.dependencies {
            for target in &dependency.depends_on {
                self.connect_bom_refs(&dependency.bom_ref, target);
            }
        }

        for component in bom.effective_components() {
            let Some(source) = component.bom_ref.as_deref() else {
                continue;
            };
            for target in &component.dependencies {
                self.connect_bom_refs(source, &target.bom_ref);
            }
        }
    }

    fn connect_bom_refs(&mut self, source: &str, target: &str) {
        let mapping = self.mapping;
        let parent = mapping.id_for_bom_ref(source);
        let child = mapping.id_for_bom_ref(target);

        match (parent, child) {
            (Some(parent), Some(child)) => self.connect(parent, child),
            _ => self.stats.unresolved_bom_refs += 1,
        }
    }

    fn connect(&mut self, parent: &str, child: &str) {
        if parent == child {
            self.stats.self_edges += 1;
            return;
        }
        if !self.seen.insert((parent.to_string(), child.to_string())) {
            self.stats.duplicate_connections += 1;
            return;
        }

        self.relationships.push(SpdxRelationship::new(
            parent,
            child,
            RelationshipType::DependsOn,
        ));
        self.relationships.push(SpdxRelationship::new(
            child,
            parent,
            RelationshipType::DependencyOf,
        ));
    }

    pub fn build(self) -> (Vec<SpdxRelationship>, RelationshipStats) {
        (self.relationships, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_conversion::services::component_mapper::ComponentMapper;
    use crate::sbom_conversion::services::spdx_id_generator::SpdxIdGenerator;

    const APP: &str = "SPDXRef-Application-test";

    fn mapping(json: &str) -> ComponentMapping {
        let bom = CycloneDxBom::from_json(json).unwrap();
        let mut mapper = ComponentMapper::new(SpdxIdGenerator::new(vec![APP]));
        if let Some(root) = bom.root_bom_ref() {
            mapper.alias_bom_ref(root, APP);
        }
        for component in bom.effective_components() {
            mapper.map_component(component);
        }
        mapper.finish().0
    }

    fn triples(relationships: &[SpdxRelationship]) -> Vec<(String, String, String)> {
        relationships
            .iter()
            .map(|r| {
                (
                    r.spdx_element_id.clone(),
                    r.related_spdx_element.clone(),
                    r.relationship_type.to_string(),
                )
            })
            .collect()
    }

    const REQUESTS: &str = r#"{"components":[
        {"name": "requests", "version": "2.32.3", "bom-ref": "r"},
        {"name": "urllib3", "version": "2.2.1", "bom-ref": "u"}
    ]}"#;

    #[test]
    fn test_describes_comes_first() {
        let mapping = mapping(REQUESTS);
        let (relationships, stats) = RelationshipBuilder::new(APP, &mapping).build();

        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0].spdx_element_id, DOCUMENT_SPDX_ID);
        assert_eq!(relationships[0].related_spdx_element, APP);
        assert_eq!(relationships[0].relationship_type, RelationshipType::Describes);
        assert_eq!(stats, RelationshipStats::default());
    }

    #[test]
    fn test_direct_edge_connects_application() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://requests@2.32.3",
            "2.32.3",
            true,
            "",
        )]);
        let (relationships, _) = builder.build();

        let requests = "SPDXRef-Package-requests-2-32-3";
        assert_eq!(
            triples(&relationships)[1..],
            [
                (APP.to_string(), requests.to_string(), "DEPENDS_ON".to_string()),
                (requests.to_string(), APP.to_string(), "DEPENDENCY_OF".to_string()),
            ]
        );
    }

    #[test]
    fn test_transitive_edge_connects_parent() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://urllib3@2.2.1",
            "2.2.1",
            false,
            "pypi://requests@2.32.3",
        )]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 3);
        assert_eq!(relationships[1].spdx_element_id, "SPDXRef-Package-requests-2-32-3");
        assert_eq!(relationships[1].related_spdx_element, "SPDXRef-Package-urllib3-2-2-1");
        assert_eq!(stats.unresolved_edges, 0);
    }

    #[test]
    fn test_direct_edge_with_parent_emits_both_connections() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://urllib3@2.2.1",
            "2.2.1",
            true,
            "pypi://requests@2.32.3",
        )]);
        let (relationships, _) = builder.build();

        assert_eq!(relationships.len(), 5);
        assert_eq!(relationships[1].spdx_element_id, APP);
        assert_eq!(relationships[3].spdx_element_id, "SPDXRef-Package-requests-2-32-3");
    }

    #[test]
    fn test_duplicate_edges_emit_once() {
        let mapping = mapping(REQUESTS);
        let edge = DependencyEdge::new("pypi://urllib3@2.2.1", "2.2.1", false, "pypi://requests@2.32.3");
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[edge.clone(), edge.clone(), edge]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 3);
        assert_eq!(stats.duplicate_connections, 2);
    }

    #[test]
    fn test_unresolved_edges_are_dropped_and_counted() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[
            DependencyEdge::new("pypi://missing@1.0", "1.0", true, ""),
            DependencyEdge::new("pypi://urllib3@2.2.1", "2.2.1", false, "pypi://ghost@0.1"),
            DependencyEdge::new("pypi://noversion", "", true, ""),
        ]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 1);
        assert_eq!(stats.unresolved_edges, 3);
    }

    #[test]
    fn test_direct_edge_with_unknown_parent_is_not_counted() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://requests@2.32.3",
            "2.32.3",
            true,
            "pypi://acme-service@3.1.0",
        )]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 3);
        assert_eq!(relationships[1].spdx_element_id, APP);
        assert_eq!(stats.unresolved_edges, 0);
    }

    #[test]
    fn test_resolved_version_overrides_embedded_version() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new("pypi://requests@2.32", "2.32.3", true, "")]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 3);
        assert_eq!(stats.unresolved_edges, 0);
    }

    #[test]
    fn test_self_edge_is_skipped() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://requests@2.32.3",
            "2.32.3",
            false,
            "pypi://requests@2.32.3",
        )]);
        let (relationships, stats) = builder.build();

        assert_eq!(relationships.len(), 1);
        assert_eq!(stats.self_edges, 1);
    }

    #[test]
    fn test_bom_graph_top_level_and_embedded() {
        let json = r#"{
            "metadata": {"component": {"name": "app", "bom-ref": "root"}},
            "components": [
                {"name": "requests", "version": "2.32.3", "bom-ref": "r", "dependencies": [{"ref": "u"}]},
                {"name": "urllib3", "version": "2.2.1", "bom-ref": "u"}
            ],
            "dependencies": [
                {"ref": "root", "dependsOn": ["r", "unknown"]},
                {"ref": "r", "dependsOn": ["u"]}
            ]
        }"#;
        let bom = CycloneDxBom::from_json(json).unwrap();
        let mapping = mapping(json);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_bom_graph(&bom);
        let (relationships, stats) = builder.build();

        // DESCRIBES + root->r pair + r->u pair
        assert_eq!(relationships.len(), 5);
        assert_eq!(relationships[1].spdx_element_id, APP);
        assert_eq!(relationships[1].related_spdx_element, "SPDXRef-Package-requests-2-32-3");
        assert_eq!(stats.unresolved_bom_refs, 1);
        assert_eq!(stats.duplicate_connections, 1);
    }

    #[test]
    fn test_edges_and_bom_graph_share_deduplication() {
        let json = r#"{
            "components": [
                {"name": "requests", "version": "2.32.3", "bom-ref": "r"},
                {"name": "urllib3", "version": "2.2.1", "bom-ref": "u"}
            ],
            "dependencies": [{"ref": "r", "dependsOn": ["u"]}]
        }"#;
        let bom = CycloneDxBom::from_json(json).unwrap();
        let mapping = mapping(json);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[DependencyEdge::new(
            "pypi://urllib3@2.2.1",
            "2.2.1",
            false,
            "pypi://requests@2.32.3",
        )]);
        builder.add_bom_graph(&bom);
        let (relationships, _) = builder.build();

        assert_eq!(relationships.len(), 3);
    }

    #[test]
    fn test_pairs_are_symmetric() {
        let mapping = mapping(REQUESTS);
        let mut builder = RelationshipBuilder::new(APP, &mapping);
        builder.add_dependency_edges(&[
            DependencyEdge::new("pypi://requests@2.32.3", "2.32.3", true, ""),
            DependencyEdge::new("pypi://urllib3@2.2.1", "2.2.1", false, "pypi://requests@2.32.3"),
        ]);
        let (relationships, _) = builder.build();

        let all: HashSet<(String, String, String)> = triples(&relationships).into_iter().collect();
        for (source, target, kind) in &all {
            if kind == "DEPENDS_ON" {
                assert!(all.contains(&(target.clone(), source.clone(), "DEPENDENCY_OF".to_string())));
            }
        }
    }
}
