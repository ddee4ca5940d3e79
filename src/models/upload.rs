use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Extensions accepted for ALOG exports.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "tsv"];

/// An uploaded ALOG file: its name and the raw, still undecoded bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read an upload from disk, rejecting anything that is not a `.txt` / `.tsv` export.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AppError::InvalidInput(format!(
                "{}: expected a .txt or .tsv ALOG file",
                path.display()
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| AppError::InvalidInput(format!("{}: {e}", path.display())))?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(filename, bytes))
    }
}
