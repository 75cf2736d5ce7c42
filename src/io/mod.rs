// CSV input/output glue
pub mod reader;
pub mod writer;

pub use reader::read_sites;
pub use writer::{output_file_name, write_matches, OUTPUT_HEADER};
