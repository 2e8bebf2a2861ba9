/// Data Transfer Objects for application layer
///
/// DTOs carry data between the adapters and the use cases, keeping the
/// conversion core isolated.
mod convert_request;
mod convert_response;
mod prune_request;
mod prune_response;

pub use convert_request::ConvertRequest;
pub use convert_response::ConvertResponse;
pub use prune_request::PruneRequest;
pub use prune_response::PruneResponse;
