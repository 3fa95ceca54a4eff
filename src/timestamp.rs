//! Delta-of-delta timestamp encoding.
//!
//! Timestamps in real-world series tend to arrive at a fixed cadence,
//! so the second-order delta is almost always zero or tiny. The first
//! timestamp is stored absolute; every later one is a variable-width
//! frame picked from the bucket table in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::bitstream::BitStream;
use crate::constants::{DEFAULT_DELTA, DOD_BUCKETS, FIRST_TIMESTAMP_BITS};
use crate::error::DecodeError;

/// Writer-side timestamp state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimestampEncoder {
    prev_time: u64,
    prev_delta: i64,
}

impl TimestampEncoder {
    /// Appends one timestamp frame to `bits`.
    ///
    /// Deltas are computed with wrapping subtraction and reinterpreted
    /// as signed, so monotonic clocks behave as expected and anything
    /// else still encodes deterministically.
    pub fn encode(&mut self, bits: &mut BitStream, timestamp: u64) {
        if bits.is_empty() {
            bits.append_bits(timestamp, FIRST_TIMESTAMP_BITS);
            self.prev_time = timestamp;
            self.prev_delta = DEFAULT_DELTA;
            return;
        }

        let delta = timestamp.wrapping_sub(self.prev_time) as i64;
        let mut dod = delta.wrapping_sub(self.prev_delta);

        if dod == 0 {
            // Delta unchanged. prev_delta is left alone rather than
            // recomputed from the timestamps.
            self.prev_time = timestamp;
            bits.append_bits(0, 1);
            return;
        }

        if dod > 0 {
            // Zero is taken by the single-bit frame; shift the positive
            // side down so the payload range has no hole.
            dod -= 1;
        }

        let magnitude = dod.unsigned_abs();
        for bucket in &DOD_BUCKETS {
            if magnitude < 1 << (bucket.payload_bits - 1) {
                bits.append_bits(bucket.control, bucket.control_bits);
                // Biased so -2^(n-1) maps to 0.
                let biased = dod.wrapping_add(1 << (bucket.payload_bits - 1)) as u64;
                bits.append_bits(biased, bucket.payload_bits);
                break;
            }
        }

        self.prev_time = timestamp;
        self.prev_delta = delta;
    }
}

/// Reader-side timestamp state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimestampDecoder {
    prev_time: u64,
    prev_delta: i64,
}

impl TimestampDecoder {
    /// Reads one timestamp frame from `bits`.
    ///
    /// # Errors
    /// Returns [`DecodeError::ShortRead`] when the stream ends inside
    /// the frame.
    pub fn decode(&mut self, bits: &mut BitStream) -> Result<u64, DecodeError> {
        if bits.read_pos() == 0 {
            self.prev_delta = DEFAULT_DELTA;
            let first = bits.read_bits(FIRST_TIMESTAMP_BITS)?;
            self.prev_time = first;
            return Ok(first);
        }

        let ones = bits.find_first_zero(4)?;
        if ones > 0 {
            let bucket = &DOD_BUCKETS[ones as usize - 1];
            let payload = bits.read_bits(bucket.payload_bits)?;
            let mut dod = (payload as i64).wrapping_sub(1 << (bucket.payload_bits - 1));
            if dod >= 0 {
                // Reverse the positive-side shift.
                dod += 1;
            }
            self.prev_delta = self.prev_delta.wrapping_add(dod);
        }
        self.prev_time = self.prev_time.wrapping_add(self.prev_delta as u64);
        Ok(self.prev_time)
    }
}
