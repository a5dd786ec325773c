//! In-memory adapters
//!
//! Process-local implementations of the repository ports.

pub mod student_directory;

pub use student_directory::InMemoryStudentDirectory;
