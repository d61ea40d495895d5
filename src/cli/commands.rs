//! CLI command implementations.
//!
//! Each command loads an edge-list file, runs one query and prints either text
//! with 1-based labels or JSON with 0-based indices.

use std::path::Path;

use serde::Serialize;

use crate::engine::report::{render_distances, render_labels, render_matrix, render_walks};
use crate::engine::{samples, GraphReport};
use crate::format::EdgeListReader;
use crate::graph::VisitedSet;
use crate::types::GraphResult;

/// Which matrix view `cmd_matrix` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// V×V adjacency matrix.
    Adjacency,
    /// V×E incidence matrix.
    Incidence,
}

impl MatrixKind {
    /// Parse a matrix kind from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "adjacency" | "adj" => Some(Self::Adjacency),
            "incidence" | "inc" => Some(Self::Incidence),
            _ => None,
        }
    }

    /// Return a human-readable name for this matrix kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Adjacency => "adjacency",
            Self::Incidence => "incidence",
        }
    }
}

fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Display vertex/edge counts and the adjacency-list listing.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "adjacency_entries": graph.edge_count(),
            "adjacency": graph.adjacency(),
        });
        print_json(&info);
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Adjacency entries: {}", graph.edge_count());
        print!("{}", graph);
    }
    Ok(())
}

/// Print the adjacency or incidence matrix.
pub fn cmd_matrix(path: &Path, kind: MatrixKind, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let matrix = match kind {
        MatrixKind::Adjacency => graph.adjacency_matrix(),
        MatrixKind::Incidence => graph.incidence_matrix(),
    };

    if json {
        let info = serde_json::json!({
            "kind": kind.name(),
            "rows": matrix.rows(),
            "cols": matrix.cols(),
            "cells": matrix.to_rows(),
        });
        print_json(&info);
    } else {
        println!("{} matrix ({}x{}):", kind.name(), matrix.rows(), matrix.cols());
        print!("{}", render_matrix(&matrix));
    }
    Ok(())
}

/// Per-vertex out-degrees plus the two colouring numbers.
pub fn cmd_degrees(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let degrees: Vec<usize> = (0..graph.vertex_count())
        .map(|v| graph.out_degree(v))
        .collect();

    if json {
        let info = serde_json::json!({
            "out_degrees": degrees,
            "chromatic_number": graph.chromatic_number(),
            "edge_chromatic_number": graph.edge_chromatic_number(),
        });
        print_json(&info);
    } else {
        for (vertex, degree) in degrees.iter().enumerate() {
            println!("Vertex {}: out-degree {}", vertex + 1, degree);
        }
        println!("Chromatic number: {}", graph.chromatic_number());
        println!("Edge chromatic number: {}", graph.edge_chromatic_number());
    }
    Ok(())
}

/// Depth-first search from a 1-based start label.
pub fn cmd_dfs(path: &Path, start_label: usize, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let start = graph.index_of_label(start_label)?;
    let mut visited = VisitedSet::for_graph(&graph);
    let order = graph.depth_first_search(start, &mut visited)?;

    if json {
        print_json(&serde_json::json!({ "start": start, "order": order }));
    } else {
        println!("Depth-first search from vertex {}:", start_label);
        println!("{}", render_labels(&order));
    }
    Ok(())
}

/// Dijkstra distances from a 1-based source label.
pub fn cmd_dijkstra(path: &Path, source_label: usize, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let source = graph.index_of_label(source_label)?;
    let distances = graph.dijkstra_shortest_path(source)?;

    if json {
        print_json(&distances);
    } else {
        println!("Shortest paths from vertex {}:", source_label);
        print!("{}", render_distances(&distances));
    }
    Ok(())
}

/// Eulerian circuit/path enumeration.
pub fn cmd_euler(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let walks = graph.find_eulerian_circuits_and_paths();

    if json {
        print_json(&walks);
    } else {
        println!("Eulerian circuits and paths:");
        print!("{}", render_walks(&walks));
    }
    Ok(())
}

/// Full report for one edge-list file.
pub fn cmd_report(path: &Path, start_label: usize, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let start = graph.index_of_label(start_label)?;
    let report = GraphReport::build(&graph, start)?;

    if json {
        print_json(&report);
    } else {
        print!("{}", graph);
        println!();
        print!("{}", report.render_text());
    }
    Ok(())
}

/// Reports for the built-in sample graphs, each from vertex 1.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graphs = samples::all()?;
    let reports = graphs
        .iter()
        .map(|g| GraphReport::build(g, 0))
        .collect::<GraphResult<Vec<_>>>()?;

    if json {
        print_json(&reports);
    } else {
        for (i, (graph, report)) in graphs.iter().zip(&reports).enumerate() {
            if i > 0 {
                println!();
            }
            println!("Graph {}:", i + 1);
            print!("{}", graph);
            println!();
            print!("{}", report.render_text());
        }
    }
    Ok(())
}
