//! Asset-catalog image sets: a directory holding the PNG and a
//! `Contents.json` manifest that references it at 1x.

use std::path::{Path, PathBuf};

use crate::encode::png::{write_atomic, write_png_atomic};
use crate::foundation::error::{OrreryError, OrreryResult};

/// One image slot in a manifest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageEntry {
    /// Image file name, relative to the set directory.
    pub filename: String,
    /// Device idiom; always `universal`.
    pub idiom: String,
    /// Pixel scale such as `1x`.
    pub scale: String,
}

/// Manifest provenance block.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogInfo {
    /// Tool that wrote the manifest.
    pub author: String,
    /// Manifest format version.
    pub version: u32,
}

/// `Contents.json` as written next to the image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contents {
    /// Image slots.
    pub images: Vec<ImageEntry>,
    /// Provenance.
    pub info: CatalogInfo,
}

impl Contents {
    /// Manifest for a single universal 1x image.
    pub fn single(filename: impl Into<String>) -> Self {
        Self {
            images: vec![ImageEntry {
                filename: filename.into(),
                idiom: "universal".to_owned(),
                scale: "1x".to_owned(),
            }],
            info: CatalogInfo {
                author: "xcode".to_owned(),
                version: 1,
            },
        }
    }

    /// Two-space indented JSON, without a trailing newline.
    pub fn to_json_pretty(&self) -> OrreryResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| OrreryError::serde(e.to_string()))
    }
}

/// An image-set directory and the file name of its single image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    /// The `.imageset` directory.
    pub dir: PathBuf,
    /// Bare file name of the PNG inside `dir`.
    pub filename: String,
}

impl ImageSet {
    /// Set rooted at `dir` holding `filename`.
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
        }
    }

    /// `dir/filename`.
    pub fn image_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// `dir/Contents.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join("Contents.json")
    }

    /// Write `png` into the set and (re)write its manifest.
    pub fn write(&self, png: &[u8]) -> OrreryResult<()> {
        if self.filename.is_empty() || Path::new(&self.filename).components().count() != 1 {
            return Err(OrreryError::validation(format!(
                "image set file name '{}' must be a bare file name",
                self.filename
            )));
        }
        write_png_atomic(&self.image_path(), png)?;

        let json = Contents::single(&self.filename).to_json_pretty()?;
        write_atomic(&self.manifest_path(), json.as_bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/catalog.rs"]
mod tests;
