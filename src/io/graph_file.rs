//! JSON graph file format.
//!
//! Format (version 1):
//!
//! ```json
//! {
//!   "format": "marga-graph",
//!   "version": 1,
//!   "nodes": {
//!     "0_0":  { "x": 0.0,  "y": 0.0, "neighbors": ["15_0"] },
//!     "15_0": { "x": 15.0, "y": 0.0, "neighbors": ["0_0"] }
//!   }
//! }
//! ```
//!
//! Nodes and neighbor lists are written in identifier order, so equal
//! graphs serialize to identical bytes. The reader also accepts the
//! unversioned layout where the node map is the whole document.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::GraphFileError;
use crate::core::{MapPoint, NodeId};
use crate::graph::{GraphBuilder, SpatialGraph};

/// Format name stored in the envelope
pub const FORMAT_NAME: &str = "marga-graph";

/// Current format version
pub const FORMAT_VERSION: u32 = 1;

/// Envelope as written
#[derive(Serialize)]
struct Envelope<'a> {
    format: &'static str,
    version: u32,
    nodes: BTreeMap<&'a NodeId, NodeOut<'a>>,
}

#[derive(Serialize)]
struct NodeOut<'a> {
    x: f32,
    y: f32,
    neighbors: Vec<&'a NodeId>,
}

#[derive(Deserialize)]
struct NodeIn {
    x: f32,
    y: f32,
    #[serde(default)]
    neighbors: Vec<NodeId>,
}

/// Save a graph to a JSON file.
///
/// Writes a temporary sibling first and renames it over `path`, so a
/// failed save leaves any previous file untouched and no partial output.
pub fn save_graph<P: AsRef<Path>>(graph: &SpatialGraph, path: P) -> Result<(), GraphFileError> {
    let path = path.as_ref();
    let tmp = temp_sibling(path);

    let written = write_file(graph, &tmp)
        .and_then(|()| std::fs::rename(&tmp, path).map_err(GraphFileError::from));
    if let Err(e) = written {
        // Best effort; the write or rename error is what matters
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    info!(
        "[GraphIO] Saved {} nodes, {} edges to {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

/// Write a graph as JSON
pub fn write_graph<W: Write>(graph: &SpatialGraph, writer: W) -> Result<(), GraphFileError> {
    let nodes = graph.nodes();
    let envelope = Envelope {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        nodes: nodes
            .iter()
            .map(|node| {
                let record = NodeOut {
                    x: node.x(),
                    y: node.y(),
                    neighbors: node.neighbors().iter().map(|&j| nodes[j].id()).collect(),
                };
                (node.id(), record)
            })
            .collect(),
    };
    serde_json::to_writer(writer, &envelope)?;
    Ok(())
}

/// Load a graph from a JSON file
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<SpatialGraph, GraphFileError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file))?;

    info!(
        "[GraphIO] Loaded {} nodes, {} edges from {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Read and validate a graph from JSON
pub fn read_graph<R: Read>(reader: R) -> Result<SpatialGraph, GraphFileError> {
    let mut document: Value = serde_json::from_reader(reader)?;

    let records: BTreeMap<NodeId, NodeIn> = match document.get("format") {
        Some(Value::String(format)) if document.get("nodes").is_some() => {
            if format != FORMAT_NAME {
                return Err(GraphFileError::UnknownFormat(format.clone()));
            }
            let found = document.get("version").and_then(Value::as_u64).unwrap_or(0);
            if found != FORMAT_VERSION as u64 {
                return Err(GraphFileError::UnsupportedVersion {
                    found,
                    supported: FORMAT_VERSION,
                });
            }
            serde_json::from_value(document["nodes"].take())?
        }
        _ => {
            debug!("[GraphIO] No envelope, reading unversioned node map");
            serde_json::from_value(document)?
        }
    };

    graph_from_records(records)
}

fn write_file(graph: &SpatialGraph, path: &Path) -> Result<(), GraphFileError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_graph(graph, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Check the records describe a valid graph, then build it
fn graph_from_records(records: BTreeMap<NodeId, NodeIn>) -> Result<SpatialGraph, GraphFileError> {
    for (id, record) in &records {
        if !record.x.is_finite() || !record.y.is_finite() {
            return Err(GraphFileError::InvalidCoordinate(id.clone()));
        }
        for neighbor in &record.neighbors {
            if neighbor == id {
                return Err(GraphFileError::SelfLoop(id.clone()));
            }
            let Some(other) = records.get(neighbor) else {
                return Err(GraphFileError::UnknownNeighbor {
                    node: id.clone(),
                    neighbor: neighbor.clone(),
                });
            };
            if !other.neighbors.contains(id) {
                return Err(GraphFileError::AsymmetricEdge {
                    from: id.clone(),
                    to: neighbor.clone(),
                });
            }
        }
    }

    let mut builder = GraphBuilder::with_capacity(records.len());
    for (id, record) in &records {
        builder.add_node(id.clone(), MapPoint::new(record.x, record.y));
    }
    for (id, record) in &records {
        let Some(a) = builder.index_of(id.as_str()) else {
            continue;
        };
        for neighbor in &record.neighbors {
            if let Some(b) = builder.index_of(neighbor.as_str()) {
                builder.connect(a, b);
            }
        }
    }
    Ok(builder.build())
}
