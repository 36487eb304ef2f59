//! Output serializers.
//!
//! Each backend implements [`Exporter`], turning a [`DrawingSet`] into an
//! [`OutputDocument`] — an in-memory byte buffer tagged with its format.
//! Nothing touches the filesystem until [`OutputDocument::write_to`], which
//! writes through a temporary file in the destination directory and persists
//! it atomically, so a failed export never leaves a readable partial file.

pub mod dxf;
pub mod pdf;
pub mod png;
pub mod svg;

use std::{fs, io::Write, path::Path, str::FromStr};

use log::info;

use spandrel_core::draw::DrawingSet;

/// A serializer from drawings to one output format.
pub trait Exporter {
    fn export(&self, set: &DrawingSet) -> Result<OutputDocument, Error>;
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// The output formats one document can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Svg,
    Png,
    Pdf,
    Dxf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Svg,
        OutputFormat::Png,
        OutputFormat::Pdf,
        OutputFormat::Dxf,
    ];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Dxf => "dxf",
        }
    }

    /// Declared MIME type of the serialized bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Pdf => "application/pdf",
            Self::Dxf => "application/dxf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            "dxf" => Ok(Self::Dxf),
            other => Err(format!(
                "unknown output format `{other}`, valid values: svg, png, pdf, dxf"
            )),
        }
    }
}

/// The opaque result of one serialization: bytes plus declared format.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    format: OutputFormat,
    bytes: Vec<u8>,
}

impl OutputDocument {
    pub fn new(format: OutputFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Writes the document to `path` atomically.
    ///
    /// The bytes go to a temporary file in the destination directory first
    /// and are persisted over `path` only after a successful flush; on any
    /// failure the temporary file is removed and `path` is left untouched.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(&self.bytes)?;
        temp.flush()?;
        temp.persist(path).map_err(|err| Error::Io(err.error))?;

        info!(
            path:display = path.display(),
            bytes = self.bytes.len();
            "Output written"
        );
        Ok(())
    }
}
