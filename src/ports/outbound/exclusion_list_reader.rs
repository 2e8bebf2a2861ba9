use crate::shared::Result;
use std::path::Path;

/// ExclusionListReader port for loading exclusion keys
pub trait ExclusionListReader {
    /// Reads exclusion keys from a plain-text list
    ///
    /// One key per line. Lines are trimmed; blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Returns
    /// `None` if the list does not exist, otherwise the keys in file order
    ///
    /// # Errors
    /// Returns an error if the list exists but cannot be read
    fn read_exclusions(&self, path: &Path) -> Result<Option<Vec<String>>>;
}
