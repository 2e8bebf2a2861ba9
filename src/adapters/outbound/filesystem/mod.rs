/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_source;
mod file_writer;

pub use file_reader::{parse_exclusion_list, FileSystemReader};
pub use file_source::FileSystemSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
