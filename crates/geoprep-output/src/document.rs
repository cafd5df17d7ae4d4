//! Hierarchical document writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geoprep_model::Node;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{OutputError, Result};

/// Writes a document tree as pretty-printed JSON with 4-space indentation
/// and a trailing newline.
pub fn write_document(path: &Path, node: &Node) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::FileCreate {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    node.serialize(&mut serializer)
        .map_err(|e| OutputError::JsonWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    writeln!(writer).map_err(|e| OutputError::JsonWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush().map_err(|e| OutputError::JsonWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "wrote document");

    Ok(())
}
