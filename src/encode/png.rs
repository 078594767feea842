//! PNG encoding and atomic file writes.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;

use crate::foundation::error::{OrreryError, OrreryResult};
use crate::raster::canvas::Canvas;

/// Encode `canvas` as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> OrreryResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            canvas.data(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| OrreryError::evaluation(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> OrreryResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> OrreryResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| OrreryError::validation(format!("'{}' has no file name", path.display())))?;
    let mut tmp = std::ffi::OsString::from(".");
    tmp.push(name);
    tmp.push(format!(".tmp-{}", std::process::id()));
    Ok(path.with_file_name(tmp))
}

/// Removes the temp file unless the write was committed.
struct TempFileGuard {
    path: PathBuf,
    committed: bool,
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Write `bytes` to `path` through a sibling temp file and a rename, so
/// readers never observe a partially written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> OrreryResult<()> {
    ensure_parent_dir(path)?;
    let mut guard = TempFileGuard {
        path: temp_sibling(path)?,
        committed: false,
    };
    std::fs::write(&guard.path, bytes)
        .with_context(|| format!("failed to write '{}'", guard.path.display()))?;
    std::fs::rename(&guard.path, path).with_context(|| {
        format!(
            "failed to move '{}' into place at '{}'",
            guard.path.display(),
            path.display()
        )
    })?;
    guard.committed = true;
    Ok(())
}

/// [`write_atomic`] for encoded PNG assets.
pub fn write_png_atomic(path: &Path, bytes: &[u8]) -> OrreryResult<()> {
    write_atomic(path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
