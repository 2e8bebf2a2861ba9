use crate::sbom_conversion::domain::DOCUMENT_SPDX_ID;
use std::collections::HashSet;
use uuid::Uuid;

const PACKAGE_ID_PREFIX: &str = "SPDXRef-Package-";
const APPLICATION_ID_PREFIX: &str = "SPDXRef-Application-";

/// Placeholder for names that sanitize to nothing
const UNNAMED: &str = "unnamed";

/// SpdxIdGenerator issues collision-free package identifiers
///
/// One generator belongs to one conversion. Its used-ID set starts with the
/// document root and any reserved IDs (the application package), so no
/// component can claim them. The set is handed back with `into_used_ids`;
/// nothing is kept between conversions.
#[derive(Debug)]
pub struct SpdxIdGenerator {
    used: HashSet<String>,
}

impl SpdxIdGenerator {
    /// Creates a generator with the document root and `reserved` pre-registered
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut used: HashSet<String> = reserved.into_iter().map(Into::into).collect();
        used.insert(DOCUMENT_SPDX_ID.to_string());
        Self { used }
    }

    /// Continues from a used-ID set returned by an earlier generator
    pub fn with_used_ids(used: HashSet<String>) -> Self {
        Self::new(used)
    }

    /// Issues the ID for a (name, version) pair
    ///
    /// Base form is `SPDXRef-Package-<name>[-<version>]`. If the base is taken,
    /// `-1`, `-2`, ... is appended using the first free integer.
    pub fn generate(&mut self, name: &str, version: &str) -> String {
        let base = Self::base_id(name, version);

        let id = if self.used.contains(&base) {
            (1..)
                .map(|n| format!("{}-{}", base, n))
                .find(|candidate| !self.used.contains(candidate))
                .unwrap_or_else(|| unreachable!("unbounded range always yields a free suffix"))
        } else {
            base
        };

        self.used.insert(id.clone());
        id
    }

    /// Deterministic ID before collision handling
    pub fn base_id(name: &str, version: &str) -> String {
        let name = sanitize(name);
        let name = if name.is_empty() { UNNAMED } else { name.as_str() };
        let version = sanitize(version);

        if version.is_empty() {
            format!("{}{}", PACKAGE_ID_PREFIX, name)
        } else {
            format!("{}{}-{}", PACKAGE_ID_PREFIX, name, version)
        }
    }

    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Returns the used-ID set, ending this generator's lifetime
    pub fn into_used_ids(self) -> HashSet<String> {
        self.used
    }

    /// Builds the ID of the synthetic application package
    ///
    /// Format: `SPDXRef-Application-<first 8 hex chars of the project UUID>-<uuid v4>`.
    pub fn application_id(project_uuid: &str) -> String {
        Self::application_id_with(project_uuid, Uuid::new_v4())
    }

    pub fn application_id_with(project_uuid: &str, unique: Uuid) -> String {
        let prefix: String = project_uuid
            .chars()
            .filter(|c| *c != '-')
            .filter(|c| c.is_ascii_alphanumeric())
            .take(8)
            .collect();

        if prefix.is_empty() {
            format!("{}{}", APPLICATION_ID_PREFIX, unique)
        } else {
            format!("{}{}-{}", APPLICATION_ID_PREFIX, prefix, unique)
        }
    }
}

/// Replaces every char outside `[A-Za-z0-9]` with '-', collapses runs of '-'
/// and trims '-' from both ends
pub fn sanitize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Foo Bar"), "Foo-Bar");
        assert_eq!(sanitize("Foo/Bar"), "Foo-Bar");
        assert_eq!(sanitize("@types/node"), "types-node");
        assert_eq!(sanitize("a..b__c"), "a-b-c");
        assert_eq!(sanitize("--x--"), "x");
        assert_eq!(sanitize("1.0.0-beta+build"), "1-0-0-beta-build");
        assert_eq!(sanitize("ünïcode"), "n-code");
        assert_eq!(sanitize("..."), "");
    }

    #[test]
    fn test_base_id() {
        assert_eq!(
            SpdxIdGenerator::base_id("requests", "2.32.3"),
            "SPDXRef-Package-requests-2-32-3"
        );
        assert_eq!(SpdxIdGenerator::base_id("requests", ""), "SPDXRef-Package-requests");
        assert_eq!(SpdxIdGenerator::base_id("///", "1.0"), "SPDXRef-Package-unnamed-1-0");
    }

    #[test]
    fn test_generate_disambiguates_sanitized_collisions() {
        let mut generator = SpdxIdGenerator::new(Vec::<String>::new());
        let first = generator.generate("Foo Bar", "1.0");
        let second = generator.generate("Foo/Bar", "1.0");
        let third = generator.generate("Foo.Bar", "1.0");

        assert_eq!(first, "SPDXRef-Package-Foo-Bar-1-0");
        assert_eq!(second, "SPDXRef-Package-Foo-Bar-1-0-1");
        assert_eq!(third, "SPDXRef-Package-Foo-Bar-1-0-2");
    }

    #[test]
    fn test_generate_version_collision() {
        let mut generator = SpdxIdGenerator::new(Vec::<String>::new());
        assert_eq!(generator.generate("lib", "1.0"), "SPDXRef-Package-lib-1-0");
        assert_eq!(generator.generate("lib", "1_0"), "SPDXRef-Package-lib-1-0-1");
        assert_eq!(
            generator.generate("lib", "1.0-beta"),
            "SPDXRef-Package-lib-1-0-beta"
        );
    }

    #[test]
    fn test_generate_skips_suffix_already_taken() {
        let mut generator = SpdxIdGenerator::new(vec!["SPDXRef-Package-a-1-1"]);
        assert_eq!(generator.generate("a", "1"), "SPDXRef-Package-a-1");
        assert_eq!(generator.generate("a", "1"), "SPDXRef-Package-a-1-2");
    }

    #[test]
    fn test_reserved_ids_are_never_issued() {
        let mut generator = SpdxIdGenerator::new(vec!["SPDXRef-Package-app-1-0"]);
        assert!(generator.is_used(DOCUMENT_SPDX_ID));
        assert_eq!(generator.generate("app", "1.0"), "SPDXRef-Package-app-1-0-1");
    }

    #[test]
    fn test_generators_do_not_share_state() {
        let mut first = SpdxIdGenerator::new(Vec::<String>::new());
        let mut second = SpdxIdGenerator::new(Vec::<String>::new());
        assert_eq!(first.generate("x", "1"), "SPDXRef-Package-x-1");
        assert_eq!(second.generate("x", "1"), "SPDXRef-Package-x-1");
    }

    #[test]
    fn test_used_ids_round_trip() {
        let mut generator = SpdxIdGenerator::new(Vec::<String>::new());
        generator.generate("x", "1");
        let used = generator.into_used_ids();
        assert!(used.contains("SPDXRef-Package-x-1"));

        let mut resumed = SpdxIdGenerator::with_used_ids(used);
        assert_eq!(resumed.generate("x", "1"), "SPDXRef-Package-x-1-1");
    }

    #[test]
    fn test_application_id() {
        let unique = Uuid::parse_str("6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33").unwrap();
        assert_eq!(
            SpdxIdGenerator::application_id_with("a1b2c3d4-e5f6-7788-99aa-bbccddeeff00", unique),
            "SPDXRef-Application-a1b2c3d4-6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33"
        );
    }

    #[test]
    fn test_application_id_short_project_uuid() {
        let unique = Uuid::parse_str("6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33").unwrap();
        assert_eq!(
            SpdxIdGenerator::application_id_with("ab-c", unique),
            "SPDXRef-Application-abc-6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33"
        );
        assert_eq!(
            SpdxIdGenerator::application_id_with("", unique),
            "SPDXRef-Application-6f1c2e0a-3b7d-4c1e-9a52-0d8f4b1e7c33"
        );
    }

    #[test]
    fn test_application_id_is_unique_per_call() {
        assert_ne!(
            SpdxIdGenerator::application_id("project"),
            SpdxIdGenerator::application_id("project")
        );
    }
}
