//! High-level operations: combined reports and sample graphs.

pub mod report;
pub mod samples;

pub use report::GraphReport;
