/// Default base URL for `documentNamespace`
pub const DEFAULT_NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

/// Default version of the synthetic application package
pub const DEFAULT_APPLICATION_VERSION: &str = "1.0.0";

/// Identity of the project an SBOM is generated for
///
/// Everything here comes from the caller (CLI flags, config file); none of it
/// is read from the CycloneDX input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub namespace: String,
    pub project_uuid: String,
    pub organization: Option<String>,
    pub person_email: Option<String>,
    pub namespace_base: String,
    pub application_version: String,
}

impl ProjectContext {
    pub fn new(namespace: &str, project_uuid: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            project_uuid: project_uuid.to_string(),
            organization: None,
            person_email: None,
            namespace_base: DEFAULT_NAMESPACE_BASE.to_string(),
            application_version: DEFAULT_APPLICATION_VERSION.to_string(),
        }
    }

    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization.filter(|o| !o.trim().is_empty());
        self
    }

    pub fn with_person_email(mut self, person_email: Option<String>) -> Self {
        self.person_email = person_email.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_namespace_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base.filter(|b| !b.trim().is_empty()) {
            self.namespace_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn with_application_version(mut self, version: Option<String>) -> Self {
        if let Some(version) = version.filter(|v| !v.trim().is_empty()) {
            self.application_version = version;
        }
        self
    }

    /// SPDX document name
    pub fn document_name(&self) -> String {
        format!("SBOM for {} Project {}", self.namespace, self.project_uuid)
    }

    /// Display name of the synthetic top-level package
    pub fn application_name(&self) -> String {
        format!("{} Application", self.namespace)
    }
}
