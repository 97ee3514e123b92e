//! Sample dump loading and writing

pub mod raw;

pub use raw::{decode_raw, load_raw, write_raw, ByteOrder, RawError, SampleBuffer};
