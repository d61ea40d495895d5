//! Error types for the graphkit library.

use thiserror::Error;

/// All errors that can occur in the graphkit library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An argument is outside its valid domain (negative vertex count,
    /// visited state sized for another graph).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex index or label lies outside the graph.
    #[error("Vertex {index} out of range{}", describe_range(.min, .max))]
    IndexOutOfRange { index: i64, min: i64, max: i64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl GraphError {
    /// Out-of-range error for a 1-based vertex label.
    pub(crate) fn label_out_of_range(label: usize, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            index: saturating_i64(label),
            min: 1,
            max: saturating_i64(vertex_count),
        }
    }

    /// Out-of-range error for a 0-based vertex index.
    pub(crate) fn index_out_of_range(index: usize, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            index: saturating_i64(index),
            min: 0,
            max: saturating_i64(vertex_count) - 1,
        }
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// An empty bound range means the graph has no vertices at all.
fn describe_range(min: &i64, max: &i64) -> String {
    if max < min {
        ": graph has no vertices".to_string()
    } else {
        format!(" [{}, {}]", min, max)
    }
}

/// Convenience result type for graphkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
