//! WAV decoding into mono sample buffers

use std::io::Read;
use std::path::Path;

use domain::AudioBuffer;
use hound::{SampleFormat, WavReader};

use crate::error::SpeechError;

/// Load a WAV file as a mono 16-bit buffer
///
/// Integer samples of any width are rescaled to 16 bits, float samples are
/// clamped to `[-1.0, 1.0]`, and multi-channel audio is averaged to mono.
///
/// # Errors
///
/// Returns `SpeechError::InvalidAudio` if the file cannot be opened or is
/// not a valid WAV file.
pub fn load_mono(path: &Path) -> Result<AudioBuffer, SpeechError> {
    let reader = WavReader::open(path)?;
    decode(reader)
}

fn decode<R: Read>(reader: WavReader<R>) -> Result<AudioBuffer, SpeechError> {
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(SpeechError::InvalidAudio("WAV file has no channels".to_string()));
    }

    let interleaved: Vec<i16> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(float_to_i16))
            .collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| int_to_i16(v, bits)))
                .collect::<Result<_, _>>()?
        },
    };

    Ok(AudioBuffer::new(
        downmix(&interleaved, usize::from(spec.channels)),
        spec.sample_rate,
    ))
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}

#[allow(clippy::cast_possible_truncation)]
fn int_to_i16(sample: i32, bits: u16) -> i16 {
    match bits {
        0..=16 => (sample << (16 - bits)) as i16,
        _ => (sample >> (bits.min(32) - 16)) as i16,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn downmix(interleaved: &[i16], channels: usize) -> Vec<i16> {
    if channels == 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Cursor;

    fn decode_bytes(bytes: &[u8]) -> Result<AudioBuffer, SpeechError> {
        decode(WavReader::new(Cursor::new(bytes))?)
    }

    fn write_wav<S: hound::Sample + Copy>(spec: WavSpec, samples: &[S]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    fn spec(channels: u16, bits: u16, format: SampleFormat) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 16_000,
            bits_per_sample: bits,
            sample_format: format,
        }
    }

    #[test]
    fn mono_16_bit_is_unchanged() {
        let bytes = write_wav(spec(1, 16, SampleFormat::Int), &[0i16, 100, -100, i16::MAX]);
        let buffer = decode_bytes(&bytes).unwrap();

        assert_eq!(buffer.samples(), &[0, 100, -100, i16::MAX]);
        assert_eq!(buffer.sample_rate(), 16_000);
    }

    #[test]
    fn stereo_is_averaged() {
        let bytes = write_wav(spec(2, 16, SampleFormat::Int), &[100i16, 300, -50, 50]);
        let buffer = decode_bytes(&bytes).unwrap();

        assert_eq!(buffer.samples(), &[200, 0]);
    }

    #[test]
    fn eight_bit_is_rescaled() {
        let bytes = write_wav(spec(1, 8, SampleFormat::Int), &[1i8, -1]);
        let buffer = decode_bytes(&bytes).unwrap();

        assert_eq!(buffer.samples(), &[256, -256]);
    }

    #[test]
    fn twenty_four_bit_is_rescaled() {
        let bytes = write_wav(spec(1, 24, SampleFormat::Int), &[256i32, -512]);
        let buffer = decode_bytes(&bytes).unwrap();

        assert_eq!(buffer.samples(), &[1, -2]);
    }

    #[test]
    fn float_is_clamped() {
        let bytes = write_wav(spec(1, 32, SampleFormat::Float), &[0.5f32, 2.0, -2.0]);
        let buffer = decode_bytes(&bytes).unwrap();

        assert_eq!(buffer.samples(), &[16383, i16::MAX, -i16::MAX]);
    }

    #[test]
    fn garbage_is_invalid_audio() {
        let result = decode_bytes(b"definitely not a wav file");
        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, write_wav(spec(1, 16, SampleFormat::Int), &[1i16, 2, 3])).unwrap();

        let buffer = load_mono(&path).unwrap();
        assert_eq!(buffer.samples(), &[1, 2, 3]);
    }

    #[test]
    fn missing_file_is_invalid_audio() {
        let result = load_mono(Path::new("/nonexistent/clip.wav"));
        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }
}
