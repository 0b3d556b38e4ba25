//! Filesystem access for ShiftByte.

pub mod discovery;
pub mod operations;

pub use discovery::list_regular_files;
pub use operations::{read_file_exact, write_file_all};
