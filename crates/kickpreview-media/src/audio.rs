//! WAV clip validation.

use crate::{extension_of, ValidationError};
use kickpreview_core::ValidationPolicy;
use std::path::Path;

/// Parameters measured from a WAV container. Diagnostic only; the duration
/// bound is the single constraint enforced beyond decodability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioInfo {
    pub channels: u16,
    pub sample_width_bits: u16,
    pub sample_rate: u32,
    pub frame_count: u32,
    pub duration_secs: f64,
}

/// Validate a local WAV clip against the policy.
///
/// The extension is checked before the file is opened, so a wrong extension
/// never touches the filesystem. The duration bound is exclusive: a clip of
/// exactly `max_audio_duration_secs` is rejected.
pub fn validate_audio(path: &Path, policy: &ValidationPolicy) -> Result<AudioInfo, ValidationError> {
    let extension = extension_of(path);
    if extension != policy.audio_extension {
        return Err(ValidationError::InvalidExtension {
            extension,
            expected: format!(".{}", policy.audio_extension),
        });
    }

    let reader =
        hound::WavReader::open(path).map_err(|source| ValidationError::UnreadableAudio { source })?;

    let spec = reader.spec();
    let frame_count = reader.duration();
    let duration_secs = frame_count as f64 / spec.sample_rate as f64;

    tracing::info!(
        path = %path.display(),
        channels = spec.channels,
        sample_width_bits = spec.bits_per_sample,
        sample_rate = spec.sample_rate,
        frame_count,
        duration_secs = format!("{:.2}", duration_secs),
        "Measured WAV parameters"
    );

    if duration_secs >= policy.max_audio_duration_secs {
        return Err(ValidationError::DurationTooLong {
            duration: duration_secs,
            max: policy.max_audio_duration_secs,
        });
    }

    Ok(AudioInfo {
        channels: spec.channels,
        sample_width_bits: spec.bits_per_sample,
        sample_rate: spec.sample_rate,
        frame_count,
        duration_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SAMPLE_RATE: u32 = 44100;

    /// Write a mono 16-bit silent WAV with the given number of frames.
    fn write_wav(dir: &TempDir, name: &str, frames: u32) -> PathBuf {
        let path = dir.path().join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for _ in 0..frames {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn half_second_clip_passes() {
        let dir = TempDir::new().unwrap();
        let path = write_wav(&dir, "kick.wav", SAMPLE_RATE / 2);

        let info = validate_audio(&path, &ValidationPolicy::default()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_width_bits, 16);
        assert_eq!(info.sample_rate, SAMPLE_RATE);
        assert_eq!(info.frame_count, SAMPLE_RATE / 2);
        assert!((info.duration_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn long_clip_is_rejected_with_measured_duration() {
        let dir = TempDir::new().unwrap();
        let path = write_wav(&dir, "long.wav", SAMPLE_RATE + SAMPLE_RATE / 5);

        match validate_audio(&path, &ValidationPolicy::default()) {
            Err(ValidationError::DurationTooLong { duration, max }) => {
                assert!((duration - 1.2).abs() < 1e-9);
                assert_eq!(max, 1.0);
            }
            other => panic!("expected DurationTooLong, got {:?}", other),
        }
    }

    #[test]
    fn exactly_one_second_is_rejected() {
        // The bound is exclusive: durations strictly below it pass.
        let dir = TempDir::new().unwrap();
        let path = write_wav(&dir, "exact.wav", SAMPLE_RATE);

        assert!(matches!(
            validate_audio(&path, &ValidationPolicy::default()),
            Err(ValidationError::DurationTooLong { .. })
        ));
    }

    #[test]
    fn wrong_extension_fails_before_filesystem_access() {
        // The path does not exist; an extension failure must not try to open it.
        let path = Path::new("/nonexistent/kick.mp3");

        match validate_audio(path, &ValidationPolicy::default()) {
            Err(ValidationError::InvalidExtension { extension, expected }) => {
                assert_eq!(extension, "mp3");
                assert_eq!(expected, ".wav");
            }
            other => panic!("expected InvalidExtension, got {:?}", other),
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_wav(&dir, "KICK.WAV", SAMPLE_RATE / 4);

        assert!(validate_audio(&path, &ValidationPolicy::default()).is_ok());
    }

    #[test]
    fn garbage_file_reports_unreadable_container() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"definitely not a wav").unwrap();

        assert!(matches!(
            validate_audio(&path, &ValidationPolicy::default()),
            Err(ValidationError::UnreadableAudio { .. })
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_wav(&dir, "kick.wav", SAMPLE_RATE / 2);
        let policy = ValidationPolicy::default();

        let first = validate_audio(&path, &policy).unwrap();
        let second = validate_audio(&path, &policy).unwrap();
        assert_eq!(first, second);
    }
}
