// Library operations - manifest I/O

pub mod io;

pub use io::{load_library, LibraryError};
