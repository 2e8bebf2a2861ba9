use super::spdx_id_generator::SpdxIdGenerator;
use crate::sbom_conversion::domain::{Component, SpdxPackage};
use crate::sbom_conversion::policies::{DownloadLocation, LicenseResolution, SupplierResolution};
use serde_json::Map;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub const DEFAULT_COMPONENT_NAME: &str = "Unknown Component";
pub const DEFAULT_COMPONENT_VERSION: &str = "0.0.0";

/// Result of mapping a component list
///
/// Holds the packages in input order plus the two lookup tables relationship
/// derivation resolves against.
#[derive(Debug, Default)]
pub struct ComponentMapping {
    pub packages: Vec<SpdxPackage>,
    name_version_ids: HashMap<String, String>,
    bom_ref_ids: HashMap<String, String>,
    duplicate_keys: usize,
}

impl ComponentMapping {
    /// SPDX ID for a `name@version` key
    pub fn id_for_key(&self, key: &str) -> Option<&str> {
        self.name_version_ids.get(key).map(String::as_str)
    }

    /// SPDX ID for a CycloneDX bom-ref
    pub fn id_for_bom_ref(&self, bom_ref: &str) -> Option<&str> {
        self.bom_ref_ids.get(bom_ref).map(String::as_str)
    }

    /// Components whose `name@version` key was already taken
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    pub fn package_ids(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.spdx_id.as_str())
    }
}

/// ComponentMapper turns CycloneDX components into SPDX packages
///
/// Exactly one package per component. The first component to claim a
/// `name@version` key (or a bom-ref) owns it in the lookup tables; later
/// duplicates still get their own package and ID.
#[derive(Debug)]
pub struct ComponentMapper {
    generator: SpdxIdGenerator,
    mapping: ComponentMapping,
}

impl ComponentMapper {
    pub fn new(generator: SpdxIdGenerator) -> Self {
        Self {
            generator,
            mapping: ComponentMapping::default(),
        }
    }

    /// Maps one component and records it in the lookup tables
    ///
    /// # Returns
    /// The SPDX ID issued for the component
    pub fn map_component(&mut self, component: &Component) -> String {
        let name = non_empty_or(component.name.as_deref(), DEFAULT_COMPONENT_NAME);
        let version = non_empty_or(component.version.as_deref(), DEFAULT_COMPONENT_VERSION);

        let spdx_id = self.generator.generate(name, version);
        let license = LicenseResolution::resolve(&component.licenses);

        let package = SpdxPackage {
            spdx_id: spdx_id.clone(),
            name: name.to_string(),
            version_info: Some(version.to_string()),
            supplier: Some(SupplierResolution::resolve(component)),
            download_location: DownloadLocation::resolve(component),
            license_concluded: Some(license.clone()),
            license_declared: Some(license),
            extra: Map::new(),
        };

        match self
            .mapping
            .name_version_ids
            .entry(package.name_version_key())
        {
            Entry::Vacant(slot) => {
                slot.insert(spdx_id.clone());
            }
            Entry::Occupied(_) => self.mapping.duplicate_keys += 1,
        }

        if let Some(bom_ref) = component.bom_ref.as_deref().filter(|r| !r.is_empty()) {
            self.mapping
                .bom_ref_ids
                .entry(bom_ref.to_string())
                .or_insert_with(|| spdx_id.clone());
        }

        self.mapping.packages.push(package);
        spdx_id
    }

    /// Registers an externally created package (the application) under a bom-ref
    pub fn alias_bom_ref(&mut self, bom_ref: &str, spdx_id: &str) {
        if bom_ref.is_empty() {
            return;
        }
        self.mapping
            .bom_ref_ids
            .entry(bom_ref.to_string())
            .or_insert_with(|| spdx_id.to_string());
    }

    /// Maps every component in order
    pub fn map_all(mut self, components: &[Component]) -> (ComponentMapping, SpdxIdGenerator) {
        for component in components {
            self.map_component(component);
        }
        self.finish()
    }

    /// Hands back the mapping and the generator with its used-ID set
    pub fn finish(self) -> (ComponentMapping, SpdxIdGenerator) {
        (self.mapping, self.generator)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
}
