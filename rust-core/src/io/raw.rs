//! Raw f64 sample dumps
//!
//! A dump is a flat run of 8-byte IEEE 754 doubles with no header, no length
//! prefix and no metadata. The sample count is the file size divided by 8.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes per sample in a dump
pub const SAMPLE_WIDTH: usize = std::mem::size_of::<f64>();

#[derive(Error, Debug)]
pub enum RawError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Raw dump is {len} bytes, which is not a whole number of 8-byte samples")]
    Misaligned { len: usize },

    #[error("Raw dump contains no samples")]
    Empty,
}

/// Byte order of the doubles in a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ByteOrder {
    /// Whatever the machine that wrote the dump used (assumed to be this one)
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    fn decode(self, bytes: [u8; SAMPLE_WIDTH]) -> f64 {
        match self {
            ByteOrder::Native => f64::from_ne_bytes(bytes),
            ByteOrder::Little => f64::from_le_bytes(bytes),
            ByteOrder::Big => f64::from_be_bytes(bytes),
        }
    }

    fn encode(self, sample: f64) -> [u8; SAMPLE_WIDTH] {
        match self {
            ByteOrder::Native => sample.to_ne_bytes(),
            ByteOrder::Little => sample.to_le_bytes(),
            ByteOrder::Big => sample.to_be_bytes(),
        }
    }
}

/// Time-domain samples loaded from a dump, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Number of samples (M)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl AsRef<[f64]> for SampleBuffer {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

/// Decode an in-memory dump
///
/// # Arguments
/// * `bytes` - Dump contents, length must be a multiple of 8
/// * `order` - Byte order of each sample
pub fn decode_raw(bytes: &[u8], order: ByteOrder) -> Result<SampleBuffer, RawError> {
    if bytes.is_empty() {
        return Err(RawError::Empty);
    }
    if bytes.len() % SAMPLE_WIDTH != 0 {
        return Err(RawError::Misaligned { len: bytes.len() });
    }

    let samples = bytes
        .chunks_exact(SAMPLE_WIDTH)
        .map(|chunk| {
            let mut word = [0u8; SAMPLE_WIDTH];
            word.copy_from_slice(chunk);
            order.decode(word)
        })
        .collect();

    Ok(SampleBuffer::new(samples))
}

/// Read a whole dump from disk
///
/// The file is read in one go and its handle is dropped before decoding, so it
/// is released on every path out of this function.
pub fn load_raw<P: AsRef<Path>>(path: P, order: ByteOrder) -> Result<SampleBuffer, RawError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| RawError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let buffer = decode_raw(&bytes, order)?;
    log::info!("Loaded {} samples from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Write samples as a dump that `load_raw` reads back unchanged
pub fn write_raw<P: AsRef<Path>>(path: P, samples: &[f64], order: ByteOrder) -> Result<(), RawError> {
    let path = path.as_ref();
    let bytes: Vec<u8> = samples.iter().flat_map(|&s| order.encode(s)).collect();

    fs::write(path, bytes).map_err(|source| RawError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1.5f64.to_le_bytes());
        bytes.extend_from_slice(&(-0.25f64).to_le_bytes());

        let buffer = decode_raw(&bytes, ByteOrder::Little).unwrap();
        assert_eq!(buffer.as_slice(), &[1.5, -0.25]);
    }

    #[test]
    fn test_decode_big_endian() {
        let bytes = 3.0f64.to_be_bytes();
        let buffer = decode_raw(&bytes, ByteOrder::Big).unwrap();
        assert_eq!(buffer.as_slice(), &[3.0]);

        // Same bytes read the other way round are a different number
        let swapped = decode_raw(&bytes, ByteOrder::Little).unwrap();
        assert_ne!(swapped.as_slice(), &[3.0]);
    }

    #[test]
    fn test_misaligned_dump() {
        let bytes = [0u8; 12];
        match decode_raw(&bytes, ByteOrder::Native) {
            Err(RawError::Misaligned { len }) => assert_eq!(len, 12),
            other => panic!("expected misaligned error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dump() {
        assert!(matches!(decode_raw(&[], ByteOrder::Native), Err(RawError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_raw("definitely/not/here/debug.raw", ByteOrder::Native).unwrap_err();
        assert!(matches!(err, RawError::Io { .. }));
        assert!(err.to_string().contains("debug.raw"));
    }

    #[test]
    fn test_write_then_load_big_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.raw");
        let samples = vec![0.0, 1.0, -1.0, f64::MIN_POSITIVE, 1e300];

        write_raw(&path, &samples, ByteOrder::Big).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 40);

        let loaded = load_raw(&path, ByteOrder::Big).unwrap();
        assert_eq!(loaded.into_inner(), samples);
    }
}
