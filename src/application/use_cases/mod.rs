/// Use cases module containing application logic orchestration
mod convert_sbom;
mod prune_dependencies;

pub use convert_sbom::ConvertSbomUseCase;
pub use prune_dependencies::PruneDependenciesUseCase;
