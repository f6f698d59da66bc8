//! Text I/O for graphs.

pub mod reader;
pub mod writer;

pub use reader::{read_from, read_from_file, read_graph};
pub use writer::{write_graph, write_to, write_to_file};
