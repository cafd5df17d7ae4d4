//! Hierarchical document reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geoprep_model::Node;

use crate::error::{IngestError, Result};

/// Reads a UTF-8 JSON document into a [`Node`] tree.
///
/// Malformed text, invalid UTF-8, and node kinds the document model does
/// not represent all surface as [`IngestError::DocumentParse`].
pub fn read_document(path: &Path) -> Result<Node> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let node = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        IngestError::DocumentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    tracing::debug!(path = %path.display(), "loaded document");

    Ok(node)
}
