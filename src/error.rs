//! Error types for reading back an encoded series.

use std::fmt;

/// Error returned when a read primitive runs out of bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bits remain between the read cursor and the end of the
    /// stream than the read requires
    ShortRead { requested: u32, remaining: u64 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRead {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "short read: {requested} bits requested, {remaining} bits remaining"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
