use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridschem_core::Circuit;
use gridschem_render::{render_circuit, Grid, RenderOptions};

/// Document format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid schematic document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schematic document version: {0}")]
    UnsupportedVersion(u32),
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

// ── Document ──────────────────────────────────────────────────────────

/// A placed circuit bundled with the options used to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: RenderOptions,
    pub circuit: Circuit,
}

impl SchematicDocument {
    pub fn new(name: &str, circuit: Circuit) -> Self {
        Self {
            version: FORMAT_VERSION,
            name: name.to_string(),
            options: RenderOptions::default(),
            circuit,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_reader(reader)?;
        if doc.version != FORMAT_VERSION {
            return Err(DocumentError::UnsupportedVersion(doc.version));
        }
        log::info!(
            "Loaded schematic '{}': {} chips, {} lines, {} net labels",
            doc.name,
            doc.circuit.chips.len(),
            doc.circuit.lines.len(),
            doc.circuit.net_labels.len()
        );
        Ok(doc)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_reader(json.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        log::info!("Reading schematic document: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), DocumentError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Render the circuit with the document's own options.
    pub fn render(&self) -> Grid {
        render_circuit(&self.circuit, &self.options)
    }
}
