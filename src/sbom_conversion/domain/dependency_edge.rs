use crate::shared::error::SbomError;
use crate::shared::Result;
use super::nullable::null_as_default;
use serde::Deserialize;

/// One dependency edge from the external dependency metadata
///
/// `name` is fully qualified (`pypi://requests@2.32.3`); `parent` is the fully
/// qualified owning package version and is empty for root-level dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyEdge {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub package_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(alias = "direct", default, deserialize_with = "null_as_default")]
    pub is_direct: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent: String,
}

/// Accepted shapes of the edge list payload
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeListPayload {
    List(Vec<DependencyEdge>),
    Wrapped { dependencies: Vec<DependencyEdge> },
}

impl DependencyEdge {
    pub fn new(name: &str, version: &str, is_direct: bool, parent: &str) -> Self {
        Self {
            name: name.to_string(),
            package_name: String::new(),
            version: version.to_string(),
            is_direct,
            parent: parent.to_string(),
        }
    }

    /// Parses a JSON array of edges, or an object holding it under `dependencies`
    ///
    /// # Errors
    /// Returns `SbomError::DependencyEdgeParseError` for any other shape.
    pub fn parse_list(content: &str) -> Result<Vec<Self>> {
        let payload: EdgeListPayload = serde_json::from_str(content).map_err(|e| {
            SbomError::DependencyEdgeParseError {
                details: e.to_string(),
            }
        })?;

        Ok(match payload {
            EdgeListPayload::List(edges) => edges,
            EdgeListPayload::Wrapped { dependencies } => dependencies,
        })
    }

    /// Direct edges hang off the application package
    pub fn is_root_level(&self) -> bool {
        self.is_direct || self.parent.trim().is_empty()
    }

    /// `name@version` key of the child, matching the mapper's lookup table
    ///
    /// The resolved `version` field wins over the version embedded in `name`.
    pub fn child_key(&self) -> Option<String> {
        normalize_qualified_name(&self.name, Some(&self.version))
    }

    /// `name@version` key of the parent, if there is one
    pub fn parent_key(&self) -> Option<String> {
        if self.parent.trim().is_empty() {
            return None;
        }
        normalize_qualified_name(&self.parent, None)
    }
}

/// Strips the ecosystem scheme and rebuilds `name@version`
///
/// Returns `None` when no name or no version can be recovered.
pub fn normalize_qualified_name(qualified: &str, resolved_version: Option<&str>) -> Option<String> {
    let qualified = qualified.trim();
    let bare = qualified
        .rsplit_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(qualified);

    // A leading '@' belongs to the name (npm scopes), never to the version
    let (name, embedded_version) = match bare.rsplit_once('@') {
        Some((name, version)) if !name.is_empty() => (name, Some(version)),
        _ => (bare, None),
    };

    let version = resolved_version
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or(embedded_version.filter(|v| !v.is_empty()))?;

    if name.is_empty() {
        return None;
    }

    Some(format!("{}@{}", name, version))
}
