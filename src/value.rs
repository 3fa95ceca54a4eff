//! XOR value encoding with leading/trailing-zero block framing.
//!
//! Adjacent readings are frequently close or identical, so the XOR of
//! their IEEE-754 patterns clusters its non-zero bits in a narrow
//! block. Frames describe that block either freshly (leading-zero
//! count plus width) or by reusing the previous frame's window when
//! the new XOR fits inside it and the shortcut is actually cheaper.

use serde::{Deserialize, Serialize};

use crate::bitstream::BitStream;
use crate::constants::{
    BLOCK_SIZE_ADJUSTMENT, BLOCK_SIZE_LENGTH_BITS, LEADING_LENGTH_BITS, MAX_LEADING_ZEROS,
};
use crate::error::DecodeError;

/// Writer-side value state. The previous value is kept as raw IEEE-754
/// bits so NaN payloads survive round-trips unchanged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValueEncoder {
    prev_bits: u64,
    prev_leading: u32,
    prev_trailing: u32,
}

impl ValueEncoder {
    /// Appends one value frame to `bits`.
    pub fn encode(&mut self, bits: &mut BitStream, value: f64) {
        let xor = value.to_bits() ^ self.prev_bits;
        if xor == 0 {
            bits.append_bits(0, 1);
            return;
        }
        bits.append_bits(1, 1);

        // Clamping the leading count to the 5-bit field widens the block
        // over bits that are in fact zero; the payload still reconstructs
        // the full XOR.
        let leading = xor.leading_zeros().min(MAX_LEADING_ZEROS);
        let trailing = xor.trailing_zeros();

        let block_size = 64 - leading - trailing;
        let fresh_size = LEADING_LENGTH_BITS + BLOCK_SIZE_LENGTH_BITS + block_size;
        let prev_block = 64 - self.prev_leading - self.prev_trailing;

        if leading >= self.prev_leading
            && trailing >= self.prev_trailing
            && prev_block < fresh_size
        {
            // Reuse the previous frame's window. The stored framing
            // stays put, so a run of similar deltas amortises a single
            // fresh frame.
            bits.append_bits(1, 1);
            bits.append_bits(xor >> self.prev_trailing, prev_block);
        } else {
            bits.append_bits(0, 1);
            bits.append_bits(u64::from(leading), LEADING_LENGTH_BITS);
            bits.append_bits(
                u64::from(block_size - BLOCK_SIZE_ADJUSTMENT),
                BLOCK_SIZE_LENGTH_BITS,
            );
            bits.append_bits(xor >> trailing, block_size);
            self.prev_leading = leading;
            self.prev_trailing = trailing;
        }
        self.prev_bits = value.to_bits();
    }
}

/// Reader-side value state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValueDecoder {
    prev_bits: u64,
    prev_leading: u32,
    prev_trailing: u32,
}

impl ValueDecoder {
    /// Reads one value frame from `bits`.
    ///
    /// # Errors
    /// Returns [`DecodeError::ShortRead`] when the stream ends inside
    /// the frame.
    pub fn decode(&mut self, bits: &mut BitStream) -> Result<f64, DecodeError> {
        if bits.read_bits(1)? == 0 {
            return Ok(f64::from_bits(self.prev_bits));
        }

        let xor = if bits.read_bits(1)? == 1 {
            let width = 64 - self.prev_leading - self.prev_trailing;
            bits.read_bits(width)? << self.prev_trailing
        } else {
            let leading = bits.read_bits(LEADING_LENGTH_BITS)? as u32;
            let block_size =
                bits.read_bits(BLOCK_SIZE_LENGTH_BITS)? as u32 + BLOCK_SIZE_ADJUSTMENT;
            // The format is unframed, so a foreign byte sequence can
            // claim leading + block_size > 64. Saturate rather than
            // underflow; the sample is garbage either way.
            let trailing = 64u32.saturating_sub(leading + block_size);
            let payload = bits.read_bits(block_size)?;
            self.prev_leading = leading;
            self.prev_trailing = trailing;
            payload << trailing
        };

        self.prev_bits ^= xor;
        Ok(f64::from_bits(self.prev_bits))
    }
}
