//! Cover image validation.

use crate::{extension_of, ValidationError};
use ::image::{ImageFormat, ImageReader};
use kickpreview_core::ValidationPolicy;
use std::path::Path;

/// Declared format and pixel dimensions read from an image header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Validate a local cover image against the policy.
///
/// Checks run in a fixed order: extension, decodable header, declared
/// format, then dimensions. When both the format and the dimensions are
/// wrong the format mismatch is the reported failure.
pub fn validate_image(path: &Path, policy: &ValidationPolicy) -> Result<ImageInfo, ValidationError> {
    let extension = extension_of(path);
    if !policy.image_extensions.contains(&extension.as_str()) {
        return Err(ValidationError::InvalidExtension {
            extension,
            expected: policy
                .image_extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(" or "),
        });
    }

    let reader = ImageReader::open(path)
        .map_err(|source| ValidationError::UnreadableImage { source })?
        .with_guessed_format()
        .map_err(|source| ValidationError::UnreadableImage { source })?;

    let format = reader
        .format()
        .ok_or_else(|| ValidationError::UnsupportedImageFormat {
            format: "unknown".to_string(),
        })?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|source| ValidationError::UndecodableImage { source })?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        width,
        height,
        "Measured image parameters"
    );

    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(ValidationError::UnsupportedImageFormat {
            format: format!("{:?}", format),
        });
    }

    if width < policy.min_image_width || height < policy.min_image_height {
        return Err(ValidationError::ImageTooSmall {
            width,
            height,
            min_width: policy.min_image_width,
            min_height: policy.min_image_height,
        });
    }

    Ok(ImageInfo {
        format,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::RgbImage;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_image(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    fn write_with_format(
        dir: &TempDir,
        name: &str,
        width: u32,
        height: u32,
        format: ImageFormat,
    ) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::new(width, height)
            .save_with_format(&path, format)
            .unwrap();
        path
    }

    #[test]
    fn large_png_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_image(&dir, "cover.png", 600, 600);

        let info = validate_image(&path, &ValidationPolicy::default()).unwrap();
        assert_eq!(info.format, ImageFormat::Png);
        assert_eq!((info.width, info.height), (600, 600));
    }

    #[test]
    fn large_jpeg_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_image(&dir, "cover.jpg", 640, 512);

        let info = validate_image(&path, &ValidationPolicy::default()).unwrap();
        assert_eq!(info.format, ImageFormat::Jpeg);
    }

    #[test]
    fn minimum_dimensions_are_inclusive() {
        let dir = TempDir::new().unwrap();

        let at_bound = write_image(&dir, "exact.png", 500, 500);
        assert!(validate_image(&at_bound, &ValidationPolicy::default()).is_ok());

        let below = write_image(&dir, "narrow.png", 499, 500);
        match validate_image(&below, &ValidationPolicy::default()) {
            Err(ValidationError::ImageTooSmall { width, height, .. }) => {
                assert_eq!((width, height), (499, 500));
            }
            other => panic!("expected ImageTooSmall, got {:?}", other),
        }

        let short = write_image(&dir, "short.png", 500, 499);
        assert!(matches!(
            validate_image(&short, &ValidationPolicy::default()),
            Err(ValidationError::ImageTooSmall { .. })
        ));
    }

    #[test]
    fn wrong_extension_fails_before_filesystem_access() {
        let path = Path::new("/nonexistent/cover.bmp");

        match validate_image(path, &ValidationPolicy::default()) {
            Err(ValidationError::InvalidExtension { extension, .. }) => {
                assert_eq!(extension, "bmp");
            }
            other => panic!("expected InvalidExtension, got {:?}", other),
        }
    }

    #[test]
    fn declared_format_beats_the_extension() {
        // A GIF byte stream behind a .png name: the decoder's guessed format
        // decides, and the format mismatch is reported.
        let dir = TempDir::new().unwrap();
        let path = write_with_format(&dir, "disguised.png", 600, 600, ImageFormat::Gif);

        match validate_image(&path, &ValidationPolicy::default()) {
            Err(ValidationError::UnsupportedImageFormat { format }) => {
                assert_eq!(format, "Gif");
            }
            other => panic!("expected UnsupportedImageFormat, got {:?}", other),
        }
    }

    #[test]
    fn format_mismatch_is_reported_before_dimensions() {
        // Both checks would fail here; the format one wins.
        let dir = TempDir::new().unwrap();
        let path = write_with_format(&dir, "tiny.png", 100, 100, ImageFormat::Gif);

        assert!(matches!(
            validate_image(&path, &ValidationPolicy::default()),
            Err(ValidationError::UnsupportedImageFormat { .. })
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_image(&dir, "cover.png", 600, 600);
        let policy = ValidationPolicy::default();

        let first = validate_image(&path, &policy).unwrap();
        let second = validate_image(&path, &policy).unwrap();
        assert_eq!(first, second);
    }
}
