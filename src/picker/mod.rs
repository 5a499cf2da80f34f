/// Replacement-image acquisition
///
/// This module handles:
/// - Picking a replacement image with the native file dialog
/// - Capturing a replacement image via an external camera command
/// - Producing a cropped working copy of whatever was acquired (crop.rs)
///
/// Both operations resolve asynchronously to either the path of the working
/// copy or an `AcquireError`. Failures are always recovered by the caller;
/// nothing in here panics on a bad image or a cancelled dialog.

pub mod crop;

use std::fmt;
use std::path::PathBuf;

use chrono::Utc;
use tokio::process::Command;

/// File extensions offered by the native picker dialogs.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif", "tiff"];

/// How a replacement image was acquired. Used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionKind {
    /// Picked from disk with the file dialog.
    Device,
    /// Captured with the external camera command.
    Camera,
}

impl fmt::Display for AcquisitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AcquisitionKind::Device => "device picker",
            AcquisitionKind::Camera => "camera capture",
        })
    }
}

/// Why an acquisition produced no replacement image.
///
/// Variants carry rendered strings instead of source errors so the type can
/// travel inside `Clone` application messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquireError {
    /// The user dismissed the picker without choosing a file.
    #[error("selection cancelled")]
    Cancelled,
    /// No camera capture command is configured.
    #[error("no camera capture command configured")]
    NoCaptureTool,
    /// The capture command failed to produce an image.
    #[error("capture command failed: {0}")]
    Capture(String),
    /// Reading or writing the working copy failed.
    #[error("could not read or write image: {0}")]
    Io(String),
    /// The acquired file is not a decodable image.
    #[error("could not decode image: {0}")]
    Decode(String),
}

/// Pick a replacement image from disk and produce a cropped working copy.
pub async fn select_and_crop_from_device(cache_dir: PathBuf) -> Result<PathBuf, AcquireError> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select Replacement Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .ok_or(AcquireError::Cancelled)?;

    crop::crop_to_working_copy(handle.path().to_path_buf(), cache_dir).await
}

/// Capture a replacement image with the configured external camera command
/// and produce a cropped working copy.
///
/// The command is run with the target file path appended as its final
/// argument and must write the captured frame there.
pub async fn select_and_crop_from_camera(
    capture_command: Option<String>,
    cache_dir: PathBuf,
) -> Result<PathBuf, AcquireError> {
    let command = capture_command.ok_or(AcquireError::NoCaptureTool)?;
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(AcquireError::NoCaptureTool)?;

    let shot_path = std::env::temp_dir().join(format!(
        "image-editor-capture-{}.png",
        Utc::now().timestamp_millis()
    ));

    let status = Command::new(program)
        .args(parts)
        .arg(&shot_path)
        .status()
        .await
        .map_err(|e| AcquireError::Capture(format!("{program}: {e}")))?;

    if !status.success() {
        return Err(AcquireError::Capture(format!("{program} exited with {status}")));
    }
    if !shot_path.exists() {
        return Err(AcquireError::Capture(format!("{program} produced no image file")));
    }

    let result = crop::crop_to_working_copy(shot_path.clone(), cache_dir).await;

    // The raw capture is no longer needed once the working copy exists.
    if result.is_ok() {
        let _ = tokio::fs::remove_file(&shot_path).await;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_without_configured_command_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();

        let result = select_and_crop_from_camera(None, dir.path().to_path_buf()).await;

        assert_eq!(result, Err(AcquireError::NoCaptureTool));
    }

    #[tokio::test]
    async fn test_capture_with_failing_command_reports_capture_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = select_and_crop_from_camera(
            Some("false".to_string()),
            dir.path().to_path_buf(),
        )
        .await;

        assert!(matches!(result, Err(AcquireError::Capture(_))));
    }

    #[tokio::test]
    async fn test_capture_command_that_writes_nothing_reports_capture_error() {
        let dir = tempfile::tempdir().unwrap();

        // `true` succeeds but never writes the target file.
        let result = select_and_crop_from_camera(
            Some("true".to_string()),
            dir.path().to_path_buf(),
        )
        .await;

        assert!(matches!(result, Err(AcquireError::Capture(_))));
    }
}
