use crate::shared::error::SbomError;
use crate::shared::Result;
use super::nullable::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Literal ID of the synthetic document node
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const DATA_LICENSE: &str = "CC0-1.0";
/// SPDX sentinel for "no claim is made about this field"
pub const NO_ASSERTION: &str = "NOASSERTION";

/// Root SPDX 2.3 document
///
/// Fields this crate does not model are kept in `extra` so that pruning an
/// externally produced document does not lose information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxDocument {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    #[serde(rename = "spdxVersion")]
    pub spdx_version: String,
    #[serde(rename = "creationInfo")]
    pub creation_info: CreationInfo,
    pub name: String,
    #[serde(rename = "dataLicense")]
    pub data_license: String,
    #[serde(rename = "documentNamespace")]
    pub document_namespace: String,
    #[serde(rename = "documentDescribes", default, deserialize_with = "null_as_default")]
    pub document_describes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<SpdxPackage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: Vec<SpdxRelationship>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationInfo {
    pub created: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creators: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// SPDX package entry
///
/// Optional SPDX fields are `Option` so that documents read from elsewhere
/// round-trip without gaining fields. Converted packages always fill them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(rename = "versionInfo", default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(rename = "downloadLocation", default = "no_assertion")]
    pub download_location: String,
    #[serde(
        rename = "licenseConcluded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_concluded: Option<String>,
    #[serde(
        rename = "licenseDeclared",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub license_declared: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn no_assertion() -> String {
    NO_ASSERTION.to_string()
}

impl SpdxPackage {
    /// Version string used for `name@version` matching; empty when absent
    pub fn version(&self) -> &str {
        self.version_info.as_deref().unwrap_or("")
    }

    /// `"{name}@{version}"` key shared by the mapper and the pruner
    pub fn name_version_key(&self) -> String {
        format!("{}@{}", self.name, self.version())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpdxRelationship {
    #[serde(rename = "spdxElementId")]
    pub spdx_element_id: String,
    #[serde(rename = "relatedSpdxElement")]
    pub related_spdx_element: String,
    #[serde(rename = "relationshipType")]
    pub relationship_type: RelationshipType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpdxRelationship {
    pub fn new(source: &str, target: &str, relationship_type: RelationshipType) -> Self {
        Self {
            spdx_element_id: source.to_string(),
            related_spdx_element: target.to_string(),
            relationship_type,
            extra: Map::new(),
        }
    }

    /// True when either endpoint is in `ids`
    pub fn touches(&self, ids: &HashSet<String>) -> bool {
        ids.contains(&self.spdx_element_id) || ids.contains(&self.related_spdx_element)
    }
}

/// Relationship kinds emitted by the converter
///
/// Kinds outside this vocabulary appear in documents produced by other tools;
/// they are carried through as `Other` so pruning does not rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    Describes,
    DependsOn,
    DependencyOf,
    Other(String),
}

impl RelationshipType {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Describes => "DESCRIBES",
            RelationshipType::DependsOn => "DEPENDS_ON",
            RelationshipType::DependencyOf => "DEPENDENCY_OF",
            RelationshipType::Other(s) => s,
        }
    }
}

impl From<String> for RelationshipType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "DESCRIBES" => RelationshipType::Describes,
            "DEPENDS_ON" => RelationshipType::DependsOn,
            "DEPENDENCY_OF" => RelationshipType::DependencyOf,
            _ => RelationshipType::Other(s),
        }
    }
}

impl From<RelationshipType> for String {
    fn from(t: RelationshipType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SpdxDocument {
    /// Parses an SPDX 2.3 JSON document
    ///
    /// Like the CycloneDX reader, accepts an export envelope whose `spec.data`
    /// field holds the document as a JSON string.
    ///
    /// # Errors
    /// Returns `SbomError::SpdxParseError` when the payload is not valid JSON
    /// or lacks the required document fields.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(spdx_parse_error)?;

        let value = match value.pointer("/spec/data") {
            Some(Value::String(inner)) => serde_json::from_str(inner).map_err(spdx_parse_error)?,
            _ => value,
        };

        serde_json::from_value(value).map_err(spdx_parse_error)
    }

    /// IDs a relationship may legally reference: the document root plus every package
    pub fn element_ids(&self) -> HashSet<String> {
        let mut ids: HashSet<String> = self.packages.iter().map(|p| p.spdx_id.clone()).collect();
        ids.insert(DOCUMENT_SPDX_ID.to_string());
        ids
    }

    /// Lists referential integrity problems
    ///
    /// Reports duplicate package IDs and every relationship endpoint that is
    /// neither the document root nor a package in this document. An empty
    /// result means the document is consistent.
    pub fn dangling_references(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for package in &self.packages {
            if !seen.insert(package.spdx_id.as_str()) {
                problems.push(format!("duplicate package ID {}", package.spdx_id));
            }
        }

        let ids = self.element_ids();
        for rel in &self.relationships {
            for endpoint in [&rel.spdx_element_id, &rel.related_spdx_element] {
                if !ids.contains(endpoint) {
                    problems.push(format!(
                        "{} relationship {} -> {} references unknown element {}",
                        rel.relationship_type,
                        rel.spdx_element_id,
                        rel.related_spdx_element,
                        endpoint
                    ));
                }
            }
        }

        problems
    }

    pub fn count_relationships(&self, relationship_type: &RelationshipType) -> usize {
        self.relationships
            .iter()
            .filter(|r| &r.relationship_type == relationship_type)
            .count()
    }
}

fn spdx_parse_error(e: serde_json::Error) -> anyhow::Error {
    SbomError::SpdxParseError {
        details: e.to_string(),
    }
    .into()
}
