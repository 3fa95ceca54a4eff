//! `deltaxor` - Lossless Gorilla-style time series compression
//!
//! Compresses a stream of `(timestamp, f64)` samples into a dense
//! bitstream and reads every sample back exactly, using the scheme
//! popularized by Facebook's Gorilla in-memory TSDB: delta-of-delta
//! encoding for timestamps and XOR-of-previous encoding for values.
//!
//! # Features
//! - **High compression**: minute-cadence series with slowly varying
//!   values cost ~2 bits per sample after the first
//! - **O(1) append**: bits are emitted immediately, no finalize step
//! - **Interleaved access**: the read cursor is independent of the
//!   write cursor, so reads and appends can alternate
//! - **Lossless**: values round-trip bit-exactly, NaN payloads included
//!
//! # Example
//! ```
//! use deltaxor::Series;
//!
//! let mut series = Series::new();
//! series.append(1440583200, 761.0);
//! series.append(1440583260, 727.0);
//! series.append(1440583320, 765.0);
//!
//! println!("encoded {} samples into {} bits", 3, series.num_bits());
//!
//! for _ in 0..3 {
//!     let sample = series.read().unwrap();
//!     println!("ts={}, value={}", sample.ts, sample.value);
//! }
//!
//! // The stream is unframed: reading past the end reports a short read.
//! assert!(series.read().is_err());
//! ```
//!
//! # Encoding Format
//!
//! The stream is a plain bit sequence, MSB-first within each byte, with
//! no header, length prefix, or terminator:
//!
//! - Bits `[0, 32)`: the first timestamp, absolute.
//! - The first value frame, XORed against 0.0.
//! - For each later sample, one timestamp frame then one value frame.
//!
//! Timestamp frames spend 1 bit when the delta repeats and otherwise a
//! 2-4 bit control prefix plus a 7/9/12/32-bit payload holding the
//! delta-of-delta. Value frames spend 1 bit for a repeated value and
//! otherwise describe the non-zero block of the XOR, either with fresh
//! leading/width fields or by reusing the previous frame's window.

pub mod bitstream;
pub mod constants;
pub mod error;
pub mod sample;
pub mod series;
pub mod timestamp;
pub mod value;

// Re-export primary types at the crate root.
pub use bitstream::BitStream;
pub use error::DecodeError;
pub use sample::Sample;
pub use series::Series;
pub use timestamp::{TimestampDecoder, TimestampEncoder};
pub use value::{ValueDecoder, ValueEncoder};

#[cfg(test)]
mod tests;
