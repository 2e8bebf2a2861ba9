use crate::sbom_conversion::domain::{Component, NO_ASSERTION};

/// SupplierResolution policy
///
/// Priority order:
/// 1. `supplier.name`
/// 2. `publisher`
/// 3. NOASSERTION
///
/// A known supplier is rendered as `Organization: <name>`. The sentinel is
/// emitted bare: `Organization: NOASSERTION` is not valid SPDX.
pub struct SupplierResolution;

impl SupplierResolution {
    pub fn resolve(component: &Component) -> String {
        let supplier_name = component
            .supplier
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let name = supplier_name.or_else(|| {
            component
                .publisher
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
        });

        Self::format_organization(name)
    }

    /// Formats an optional organization name as an SPDX supplier string
    pub fn format_organization(name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => format!("Organization: {}", n),
            None => NO_ASSERTION.to_string(),
        }
    }
}
