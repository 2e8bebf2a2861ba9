use crate::sbom_conversion::domain::{Component, NO_ASSERTION};

/// External reference types accepted as a download location
const DOWNLOAD_REFERENCE_TYPES: [&str; 2] = ["vcs", "distribution"];

/// DownloadLocation policy
///
/// 1. If the component has an external-reference list, the first `vcs` or
///    `distribution` entry wins (its url, or NOASSERTION when it has none).
///    A list without a matching entry yields NOASSERTION; the purl is not
///    consulted in that case.
/// 2. Only without any external-reference list: `purl`, else NOASSERTION.
pub struct DownloadLocation;

impl DownloadLocation {
    pub fn resolve(component: &Component) -> String {
        match &component.external_references {
            Some(references) => references
                .iter()
                .find(|r| {
                    r.ref_type
                        .as_deref()
                        .is_some_and(|t| DOWNLOAD_REFERENCE_TYPES.contains(&t))
                })
                .and_then(|r| r.url.as_deref())
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(NO_ASSERTION)
                .to_string(),
            None => component
                .purl
                .as_deref()
                .filter(|purl| !purl.trim().is_empty())
                .unwrap_or(NO_ASSERTION)
                .to_string(),
        }
    }
}
