//! Text input for edge-list files.

pub mod reader;

pub use reader::EdgeListReader;
