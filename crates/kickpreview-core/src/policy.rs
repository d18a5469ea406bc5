//! Validation policy constants for ingested media.

/// Constraints a submission must satisfy before anything is uploaded.
///
/// The bounds mirror what the preview player can handle: a kick preview is a
/// sub-second WAV clip and the cover art must be large enough to render on a
/// 500x500 canvas.
#[derive(Clone, Debug)]
pub struct ValidationPolicy {
    /// Exclusive upper bound on audio duration in seconds. A clip of exactly
    /// this length is rejected.
    pub max_audio_duration_secs: f64,
    pub min_image_width: u32,
    pub min_image_height: u32,
    /// Accepted audio container extension (without the dot).
    pub audio_extension: &'static str,
    /// Accepted image file extensions (without the dot).
    pub image_extensions: &'static [&'static str],
}

pub const MAX_AUDIO_DURATION_SECS: f64 = 1.0;
pub const MIN_IMAGE_WIDTH: u32 = 500;
pub const MIN_IMAGE_HEIGHT: u32 = 500;

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_audio_duration_secs: MAX_AUDIO_DURATION_SECS,
            min_image_width: MIN_IMAGE_WIDTH,
            min_image_height: MIN_IMAGE_HEIGHT,
            audio_extension: "wav",
            image_extensions: &["jpg", "png"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_product_constraints() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.max_audio_duration_secs, 1.0);
        assert_eq!(policy.min_image_width, 500);
        assert_eq!(policy.min_image_height, 500);
        assert_eq!(policy.audio_extension, "wav");
        assert!(policy.image_extensions.contains(&"jpg"));
        assert!(policy.image_extensions.contains(&"png"));
    }
}
