//! Series facade composing the bitstream with both codecs.

use serde::{Deserialize, Serialize};

use crate::bitstream::BitStream;
use crate::error::DecodeError;
use crate::sample::Sample;
use crate::timestamp::{TimestampDecoder, TimestampEncoder};
use crate::value::{ValueDecoder, ValueEncoder};

/// A single compressed time series.
///
/// Appends go through writer-side codec state; reads go through an
/// independent reader-side state that replays the stream from bit zero.
/// The two cursors may be interleaved freely as long as the reader
/// never runs past what has been written.
///
/// The encoded stream carries no sample count and no terminator, so
/// the caller decides how many reads are meaningful; one read past the
/// end returns [`DecodeError::ShortRead`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    bits: BitStream,
    ts_writer: TimestampEncoder,
    ts_reader: TimestampDecoder,
    val_writer: ValueEncoder,
    val_reader: ValueDecoder,
}

impl Series {
    /// Creates a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopens a snapshotted stream for reading.
    ///
    /// `num_bits` must be the bit count reported at snapshot time.
    /// Only the raw bits are recoverable from a snapshot; to resume
    /// *appending* where a previous session left off, persist the
    /// `Series` itself (it serializes with serde, codec state included).
    #[must_use]
    pub fn from_parts(bytes: Vec<u8>, num_bits: u64) -> Self {
        Self {
            bits: BitStream::from_parts(bytes, num_bits),
            ..Self::default()
        }
    }

    /// Appends one sample: a timestamp frame followed by a value frame.
    /// Appends cannot fail; the stream grows on demand.
    #[inline]
    pub fn append(&mut self, ts: u64, value: f64) {
        self.ts_writer.encode(&mut self.bits, ts);
        self.val_writer.encode(&mut self.bits, value);
    }

    /// Reads the next sample, advancing the read cursor.
    ///
    /// # Errors
    /// Returns [`DecodeError::ShortRead`] when fewer bits remain than
    /// the next frame requires.
    #[inline]
    pub fn read(&mut self) -> Result<Sample, DecodeError> {
        let ts = self.ts_reader.decode(&mut self.bits)?;
        let value = self.val_reader.decode(&mut self.bits)?;
        Ok(Sample { ts, value })
    }

    /// Total bits written so far.
    #[inline]
    #[must_use]
    pub fn num_bits(&self) -> u64 {
        self.bits.num_bits()
    }

    /// Encoded size in bytes. The last byte may be partially filled.
    #[inline]
    #[must_use]
    pub fn num_bytes(&self) -> usize {
        self.bits.as_bytes().len()
    }

    /// Returns `true` if nothing has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Raw encoded bytes. The view is valid until the next [`append`],
    /// which may reallocate the buffer.
    ///
    /// [`append`]: Series::append
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// Consumes the series and returns the raw encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bits.into_bytes()
    }
}
