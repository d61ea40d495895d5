//! Command-line layer; the only place that prints.

pub mod commands;
