//! Kick Preview media checks.
//!
//! Pure validators for the two local files a submission carries, plus the
//! link reachability check. Validators never touch the network or mutate
//! anything; the link verifier performs exactly one fetch.

pub mod audio;
pub mod image;
pub mod link;

pub use audio::{validate_audio, AudioInfo};
pub use image::{validate_image, ImageInfo};
pub use link::{LinkError, LinkVerifier};

use std::path::Path;

/// Media validation failures. Each constraint violation is a distinct
/// variant so callers can report the first failing check precisely.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid file extension: {extension:?} (expected: {expected})")]
    InvalidExtension { extension: String, expected: String },

    #[error("Unreadable WAV container: {source}")]
    UnreadableAudio {
        #[source]
        source: hound::Error,
    },

    #[error("Audio is {duration:.2} seconds, which is not under {max} seconds")]
    DurationTooLong { duration: f64, max: f64 },

    #[error("Unreadable image file: {source}")]
    UnreadableImage {
        #[source]
        source: std::io::Error,
    },

    #[error("Undecodable image: {source}")]
    UndecodableImage {
        #[source]
        source: ::image::ImageError,
    },

    #[error("Image format {format} is not JPEG or PNG")]
    UnsupportedImageFormat { format: String },

    #[error("Image is {width}x{height}px, which is less than {min_width}x{min_height}px")]
    ImageTooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Title must not be empty")]
    EmptyTitle,
}

/// Lower-cased extension of `path`, or the empty string when there is none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}
