/// Crate-wide result type. Errors are carried as `anyhow::Error` so that
/// `SbomError` variants and I/O context can travel through the same channel.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
