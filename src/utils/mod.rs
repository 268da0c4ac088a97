pub mod fs;

pub use fs::{read_document, write_document};
