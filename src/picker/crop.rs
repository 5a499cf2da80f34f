/// Center-crop pipeline for acquired images
///
/// Acquired replacements are never edited in place. Each one is decoded,
/// center-cropped to a square, capped to a sane working size, and saved as a
/// JPEG working copy in the application cache directory.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tokio::task;

use super::AcquireError;

/// Longest edge of a working copy, in pixels.
const MAX_EDGE: u32 = 1080;

/// Get the working-copy cache directory.
/// Returns ~/.cache/image-editor/crops on Linux.
pub fn crop_cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("image-editor");
    path.push("crops");
    path
}

/// Produce a cropped working copy of `source` inside `cache_dir`.
///
/// Decoding and re-encoding are CPU-bound, so the work runs on the blocking
/// thread pool and the caller only awaits the result.
pub async fn crop_to_working_copy(
    source: PathBuf,
    cache_dir: PathBuf,
) -> Result<PathBuf, AcquireError> {
    task::spawn_blocking(move || crop_blocking(&source, &cache_dir))
        .await
        .map_err(|e| AcquireError::Io(format!("task join error: {e}")))?
}

/// Blocking implementation of the crop pipeline.
fn crop_blocking(source: &Path, cache_dir: &Path) -> Result<PathBuf, AcquireError> {
    fs::create_dir_all(cache_dir).map_err(|e| AcquireError::Io(e.to_string()))?;

    let img = image::open(source).map_err(|e| AcquireError::Decode(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    let edge = width.min(height);
    let x = (width - edge) / 2;
    let y = (height - edge) / 2;

    let mut cropped = img.crop_imm(x, y, edge, edge);
    if edge > MAX_EDGE {
        cropped = cropped.resize(MAX_EDGE, MAX_EDGE, FilterType::Lanczos3);
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("capture");
    let out = cache_dir.join(format!("{stem}-{}.jpg", Utc::now().timestamp_millis()));

    // JPEG has no alpha channel, so flatten before encoding.
    let flattened = DynamicImage::ImageRgb8(cropped.to_rgb8());
    flattened
        .save_with_format(&out, ImageFormat::Jpeg)
        .map_err(|e| AcquireError::Io(e.to_string()))?;

    tracing::debug!(source = %source.display(), copy = %out.display(), "working copy created");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn write_test_image(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_pixel(width, height, Rgb([120u8, 40, 200]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_center_crop_produces_square() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("wide.png");
        write_test_image(&source, 40, 20);

        let out = crop_blocking(&source, &dir.path().join("crops")).unwrap();

        let cropped = image::open(&out).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (20, 20));
    }

    #[test]
    fn test_oversized_image_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("big.png");
        write_test_image(&source, 2400, 1200);

        let out = crop_blocking(&source, &dir.path().join("crops")).unwrap();

        let cropped = image::open(&out).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (MAX_EDGE, MAX_EDGE));
    }

    #[test]
    fn test_unreadable_source_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("garbage.png");
        fs::write(&source, b"not an image at all").unwrap();

        let result = crop_blocking(&source, &dir.path().join("crops"));

        assert!(matches!(result, Err(AcquireError::Decode(_))));
    }
}
