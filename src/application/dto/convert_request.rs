use crate::sbom_conversion::domain::ProjectContext;

/// ConvertRequest - Request DTO for the CycloneDX to SPDX conversion
///
/// The input documents themselves come from the `SbomSource` the use case
/// was built with; the request only carries the project identity.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub context: ProjectContext,
    /// Fixed application package ID; generated when `None`
    pub application_id: Option<String>,
}

impl ConvertRequest {
    pub fn new(context: ProjectContext) -> Self {
        Self {
            context,
            application_id: None,
        }
    }

    pub fn with_application_id(mut self, application_id: String) -> Self {
        self.application_id = Some(application_id);
        self
    }
}
