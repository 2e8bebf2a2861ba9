/// Field-resolution rules applied when mapping components to SPDX packages
mod download_location;
mod license_resolution;
mod supplier_resolution;

pub use download_location::DownloadLocation;
pub use license_resolution::LicenseResolution;
pub use supplier_resolution::SupplierResolution;
