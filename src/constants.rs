//! Framing constants for the delta-of-delta and XOR encodings.

/// Time delta assumed before the second sample arrives. One data point
/// per minute encodes into a single zero bit right after the first
/// timestamp.
pub const DEFAULT_DELTA: i64 = 60;

/// The first timestamp of a stream is stored absolute in this many bits.
pub const FIRST_TIMESTAMP_BITS: u32 = 32;

/// Width of the leading-zero count in a fresh XOR frame.
pub const LEADING_LENGTH_BITS: u32 = 5;

/// Width of the block-size field in a fresh XOR frame.
pub const BLOCK_SIZE_LENGTH_BITS: u32 = 6;

/// A non-zero XOR always has at least one meaningful bit, so the block
/// size is stored minus one to make 64 fit in six bits.
pub const BLOCK_SIZE_ADJUSTMENT: u32 = 1;

/// Largest leading-zero count the 5-bit field can carry. A frame whose
/// XOR has more leading zeros is widened to this clamp, payload included.
pub const MAX_LEADING_ZEROS: u32 = (1 << LEADING_LENGTH_BITS) - 1;

/// One bucket of the delta-of-delta table: payload width plus the
/// control prefix announcing it.
#[derive(Debug, Clone, Copy)]
pub struct DodBucket {
    pub payload_bits: u32,
    pub control: u64,
    pub control_bits: u32,
}

// Timestamp frame layout. Control prefixes are a unary run of ones
// closed by a zero (the widest bucket omits the closing zero), so the
// decoder selects a bucket by counting ones:
//
// - 0                 = delta-of-delta is zero (1 bit total)
// - 10   + 7 payload  = |dod| < 64
// - 110  + 9 payload  = |dod| < 256
// - 1110 + 12 payload = |dod| < 2048
// - 1111 + 32 payload = everything wider
//
// Payloads hold the dod (positive side shifted down by one) biased by
// half the payload range.
pub const DOD_BUCKETS: [DodBucket; 4] = [
    DodBucket { payload_bits: 7, control: 0b10, control_bits: 2 },
    DodBucket { payload_bits: 9, control: 0b110, control_bits: 3 },
    DodBucket { payload_bits: 12, control: 0b1110, control_bits: 4 },
    DodBucket { payload_bits: 32, control: 0b1111, control_bits: 4 },
];
