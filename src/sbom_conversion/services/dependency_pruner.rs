use crate::sbom_conversion::domain::{SpdxDocument, SpdxPackage, SpdxRelationship};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Maximum length of a single exclusion key
const MAX_KEY_LENGTH: usize = 255;

/// A package removed by the pruner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedPackage {
    pub spdx_id: String,
    pub name: String,
    pub version: String,
    /// The exclusion key that matched it
    pub matched_by: String,
}

/// What a prune run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub removed_packages: Vec<RemovedPackage>,
    /// Relationships dropped because an endpoint was a removed package
    pub removed_relationships: usize,
    /// Relationships dropped by the integrity pass that follows removal
    pub dangling_relationships: usize,
    /// Keys that matched no package, in the order given
    pub unmatched_keys: Vec<String>,
}

impl PruneReport {
    pub fn is_noop(&self) -> bool {
        self.removed_packages.is_empty()
            && self.removed_relationships == 0
            && self.dangling_relationships == 0
    }
}

/// DependencyPruner - Removes excluded packages from an SPDX document
///
/// Keys are either a bare package name (matches every version) or
/// `name@version` (matches `name@versionInfo` exactly). Matching is
/// case-sensitive. After removal, an integrity pass drops every relationship
/// whose endpoint is neither a surviving package nor `SPDXRef-DOCUMENT`,
/// whether or not it touched a removed package.
#[derive(Debug)]
pub struct DependencyPruner {
    keys: Vec<ExclusionKey>,
    index: HashMap<String, usize>,
}

impl DependencyPruner {
    /// Creates a pruner from raw exclusion keys
    ///
    /// Duplicate keys are collapsed; the first occurrence keeps its position.
    ///
    /// # Errors
    /// Returns `SbomError::InvalidExclusionKey` for blank keys, keys over 255
    /// bytes or keys containing control characters.
    pub fn new(keys: Vec<String>) -> Result<Self> {
        let mut compiled = Vec::new();
        let mut index = HashMap::new();

        for key in keys {
            validate_key(&key)?;
            if index.contains_key(&key) {
                continue;
            }
            index.insert(key.clone(), compiled.len());
            compiled.push(ExclusionKey::new(key));
        }

        Ok(Self {
            keys: compiled,
            index,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the key matching a package, preferring the exact `name@version` key
    fn matching_key(&self, package: &SpdxPackage) -> Option<&ExclusionKey> {
        self.index
            .get(&package.name_version_key())
            .or_else(|| self.index.get(&package.name))
            .map(|&i| &self.keys[i])
    }

    /// Prunes `document`, stamping `timestamp` and `tool_creator` onto it
    ///
    /// With no exclusion keys the document is returned untouched, metadata
    /// included.
    pub fn prune(
        &self,
        mut document: SpdxDocument,
        timestamp: &str,
        tool_creator: &str,
    ) -> (SpdxDocument, PruneReport) {
        if self.is_empty() {
            return (document, PruneReport::default());
        }

        let mut report = PruneReport::default();
        let mut removed_ids = HashSet::new();

        document.packages.retain(|package| match self.matching_key(package) {
            Some(key) => {
                key.mark_matched();
                removed_ids.insert(package.spdx_id.clone());
                report.removed_packages.push(RemovedPackage {
                    spdx_id: package.spdx_id.clone(),
                    name: package.name.clone(),
                    version: package.version().to_string(),
                    matched_by: key.original.clone(),
                });
                false
            }
            None => true,
        });

        report.removed_relationships =
            retain_counting(&mut document.relationships, |r| !r.touches(&removed_ids));

        let surviving = document.element_ids();
        report.dangling_relationships = retain_counting(&mut document.relationships, |r| {
            surviving.contains(&r.spdx_element_id) && surviving.contains(&r.related_spdx_element)
        });

        document
            .document_describes
            .retain(|id| surviving.contains(id));

        document.creation_info.created = timestamp.to_string();
        if !document
            .creation_info
            .creators
            .iter()
            .any(|c| c == tool_creator)
        {
            document
                .creation_info
                .creators
                .push(tool_creator.to_string());
        }

        report.unmatched_keys = self.unmatched_keys();
        (document, report)
    }

    /// Keys that have not matched any package so far
    ///
    /// Meaningful after `prune`.
    pub fn unmatched_keys(&self) -> Vec<String> {
        self.keys
            .iter()
            .filter(|k| !*k.matched.borrow())
            .map(|k| k.original.clone())
            .collect()
    }
}

/// A single exclusion key and whether it has matched
#[derive(Debug)]
struct ExclusionKey {
    original: String,
    matched: RefCell<bool>,
}

impl ExclusionKey {
    fn new(original: String) -> Self {
        Self {
            original,
            matched: RefCell::new(false),
        }
    }

    fn mark_matched(&self) {
        *self.matched.borrow_mut() = true;
    }
}

fn retain_counting<F>(relationships: &mut Vec<SpdxRelationship>, keep: F) -> usize
where
    F: FnMut(&SpdxRelationship) -> bool,
{
    let before = relationships.len();
    relationships.retain(keep);
    before - relationships.len()
}

fn validate_key(key: &str) -> Result<()> {
    let reason = if key.trim().is_empty() {
        "Exclusion key cannot be empty".to_string()
    } else if key.len() > MAX_KEY_LENGTH {
        format!(
            "Exclusion key is too long ({} bytes). Maximum: {} bytes",
            key.len(),
            MAX_KEY_LENGTH
        )
    } else if key.chars().any(char::is_control) {
        "Exclusion key contains control characters".to_string()
    } else {
        return Ok(());
    };

    Err(SbomError::InvalidExclusionKey {
        key: key.to_string(),
        reason,
    }
    .into())
}
