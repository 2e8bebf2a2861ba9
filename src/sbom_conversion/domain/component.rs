use crate::shared::error::SbomError;
use crate::shared::Result;
use super::nullable::null_as_default;
use serde::Deserialize;
use serde_json::Value;

/// CycloneDX document, reduced to the parts the converter reads
///
/// Every field is optional: exporters disagree on which ones they emit, and
/// missing data is resolved with defaults later rather than rejected here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CycloneDxBom {
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
    #[serde(default)]
    pub metadata: Option<BomMetadata>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<BomDependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BomMetadata {
    #[serde(default)]
    pub component: Option<Component>,
}

/// A single CycloneDX component
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub supplier: Option<Supplier>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub licenses: Vec<LicenseChoice>,
    /// `None` and `Some(vec![])` differ: only an absent list allows the purl fallback
    #[serde(rename = "externalReferences", default)]
    pub external_references: Option<Vec<ExternalReference>>,
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(rename = "bom-ref", default)]
    pub bom_ref: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<ComponentDependency>,
    /// Nested components (used by `metadata.component`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Supplier {
    #[serde(default)]
    pub name: Option<String>,
}

/// A license entry: either `{"license": {...}}` or `{"expression": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseChoice {
    #[serde(default)]
    pub license: Option<LicenseEntry>,
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalReference {
    #[serde(rename = "type", default)]
    pub ref_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Edge embedded in a component: `{"ref": "<bom-ref>"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentDependency {
    #[serde(rename = "ref")]
    pub bom_ref: String,
}

/// Document-level edge list entry: `{"ref": ..., "dependsOn": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct BomDependency {
    #[serde(rename = "ref")]
    pub bom_ref: String,
    #[serde(rename = "dependsOn", default, deserialize_with = "null_as_default")]
    pub depends_on: Vec<String>,
}

impl CycloneDxBom {
    /// Parses a CycloneDX JSON payload
    ///
    /// Accepts either the bare document or an export envelope whose
    /// `spec.data` field holds the document as a JSON string.
    ///
    /// # Errors
    /// Returns `SbomError::CycloneDxParseError` if the payload (or the
    /// enveloped document) is not a JSON object of the expected shape.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(parse_error)?;

        let value = match value.pointer("/spec/data") {
            Some(Value::String(inner)) => serde_json::from_str(inner).map_err(parse_error)?,
            _ => value,
        };

        if !value.is_object() {
            return Err(SbomError::CycloneDxParseError {
                details: "top-level value is not a JSON object".to_string(),
            }
            .into());
        }

        serde_json::from_value(value).map_err(parse_error)
    }

    /// Components to convert
    ///
    /// Some exporters nest everything under `metadata.component.components`
    /// and leave the top-level list empty; that list is used as a fallback.
    pub fn effective_components(&self) -> &[Component] {
        if !self.components.is_empty() {
            return &self.components;
        }
        self.metadata
            .as_ref()
            .and_then(|m| m.component.as_ref())
            .map(|c| c.components.as_slice())
            .unwrap_or(&[])
    }

    /// bom-ref of the document subject, if declared
    pub fn root_bom_ref(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.component.as_ref())
            .and_then(|c| c.bom_ref.as_deref())
    }
}

fn parse_error(e: serde_json::Error) -> anyhow::Error {
    SbomError::CycloneDxParseError {
        details: e.to_string(),
    }
    .into()
}
