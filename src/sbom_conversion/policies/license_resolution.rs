use crate::sbom_conversion::domain::{LicenseChoice, NO_ASSERTION};

/// LicenseResolution policy for turning CycloneDX license entries into SPDX strings
///
/// Priority order per entry:
/// 1. `license.id`
/// 2. `license.name`
/// 3. `expression`
///
/// All resolved entries are joined with " AND ". The same value is used for
/// both licenseConcluded and licenseDeclared.
pub struct LicenseResolution;

impl LicenseResolution {
    /// Resolves a single license entry, or None if it carries nothing usable
    pub fn resolve_entry(choice: &LicenseChoice) -> Option<String> {
        let from_license = choice.license.as_ref().and_then(|l| {
            non_empty(l.id.as_deref()).or_else(|| non_empty(l.name.as_deref()))
        });

        from_license
            .or_else(|| non_empty(choice.expression.as_deref()))
            .map(str::to_string)
    }

    /// Joins every resolvable entry, falling back to NOASSERTION
    ///
    /// # Returns
    /// The license string for both licenseConcluded and licenseDeclared
    pub fn resolve(licenses: &[LicenseChoice]) -> String {
        let resolved: Vec<String> = licenses.iter().filter_map(Self::resolve_entry).collect();

        if resolved.is_empty() {
            NO_ASSERTION.to_string()
        } else {
            resolved.join(" AND ")
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
