//! Output targets and the report of what was written.

use std::path::PathBuf;

use sha2::Digest as _;

use crate::encode::catalog::ImageSet;
use crate::encode::png::{encode_png, write_png_atomic};
use crate::foundation::error::OrreryResult;
use crate::raster::canvas::Canvas;

/// Where a rendered asset goes: one primary PNG and an optional catalog copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputTargets {
    /// Main PNG path.
    pub primary: PathBuf,
    /// Catalog image set that receives a copy of the same bytes.
    pub image_set: Option<ImageSet>,
}

/// Summary of one [`OutputTargets::write_outputs`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputReport {
    /// Every file written, manifest included.
    pub written: Vec<PathBuf>,
    /// Encoded PNG size.
    pub bytes: usize,
    /// Lowercase hex SHA-256 of the PNG.
    pub sha256: String,
}

/// Lowercase hex SHA-256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

impl OutputTargets {
    /// Targets with only the primary PNG.
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            image_set: None,
        }
    }

    /// Also write into `set`.
    pub fn with_image_set(mut self, set: ImageSet) -> Self {
        self.image_set = Some(set);
        self
    }

    /// Encode once and write the same bytes to every target.
    #[tracing::instrument(level = "debug", skip_all, fields(primary = %self.primary.display()))]
    pub fn write_outputs(&self, canvas: &Canvas) -> OrreryResult<OutputReport> {
        let png = encode_png(canvas)?;
        write_png_atomic(&self.primary, &png)?;
        let mut written = vec![self.primary.clone()];

        if let Some(set) = &self.image_set {
            set.write(&png)?;
            written.push(set.image_path());
            written.push(set.manifest_path());
        }

        Ok(OutputReport {
            written,
            bytes: png.len(),
            sha256: sha256_hex(&png),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
