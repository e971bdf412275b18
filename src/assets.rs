//! Asset resolution for the label font.
//!
//! Rasterizers never open files by name: they ask an `AssetResolver`,
//! which is configured once by the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Unavailable;

/// Supplies the font used to draw avatar labels.
pub trait AssetResolver {
    /// Raw TrueType/OpenType bytes of the label font.
    fn font(&self) -> Result<Vec<u8>, Unavailable>;
}

/// Reads the font from a file on every request.
#[derive(Debug, Clone)]
pub struct FileAssets {
    font_path: PathBuf,
}

impl FileAssets {
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
        }
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }
}

impl AssetResolver for FileAssets {
    fn font(&self) -> Result<Vec<u8>, Unavailable> {
        fs::read(&self.font_path).map_err(|e| {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("cannot read font {}: {}", self.font_path.display(), e);
            }
            Unavailable::FontMissing {
                path: self.font_path.clone(),
            }
        })
    }
}

/// Holds the font in memory (embedded fonts, tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    font: Option<Vec<u8>>,
}

impl MemoryAssets {
    pub fn new(font: Vec<u8>) -> Self {
        Self { font: Some(font) }
    }

    /// A resolver with no font at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl AssetResolver for MemoryAssets {
    fn font(&self) -> Result<Vec<u8>, Unavailable> {
        self.font.clone().ok_or(Unavailable::FontMissing {
            path: PathBuf::from("<memory>"),
        })
    }
}

/// Parse label font bytes, rejecting anything skrifa cannot read.
pub fn parse_font(data: &[u8]) -> Result<skrifa::FontRef<'_>, Unavailable> {
    skrifa::FontRef::new(data).map_err(|e| {
        log::warn!("label font rejected: {}", e);
        Unavailable::InvalidFont
    })
}

/// Fetch the label font and check that it parses.
pub fn load_font(assets: &dyn AssetResolver) -> Result<Vec<u8>, Unavailable> {
    let data = assets.font()?;
    parse_font(&data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("NotoSans-Regular.ttf");
        let assets = FileAssets::new(&path);

        assert_eq!(assets.font(), Err(Unavailable::FontMissing { path }));
    }

    #[test]
    fn test_file_bytes_are_returned() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        fs::write(&path, b"bytes").unwrap();

        assert_eq!(FileAssets::new(&path).font().unwrap(), b"bytes");
    }

    #[test]
    fn test_empty_memory_assets() {
        assert!(matches!(
            MemoryAssets::empty().font(),
            Err(Unavailable::FontMissing { .. })
        ));
    }

    #[test]
    fn test_load_font_rejects_garbage() {
        let assets = MemoryAssets::new(b"definitely not a font".to_vec());
        assert_eq!(load_font(&assets), Err(Unavailable::InvalidFont));
    }

    #[test]
    fn test_parse_font_rejects_truncated_data() {
        assert!(matches!(parse_font(&[0, 1, 0, 0]), Err(Unavailable::InvalidFont)));
        assert!(matches!(parse_font(&[]), Err(Unavailable::InvalidFont)));
    }
}
