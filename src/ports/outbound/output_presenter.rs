use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where the serialized SPDX document goes (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the serialized document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
