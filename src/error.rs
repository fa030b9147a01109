//! # Error Types
//!
//! Error handling for packet decoding.
//!
//! Every decode and cursor-control operation reports failure synchronously
//! through [`PacketError`]. A failed operation never moves the cursor, so the
//! caller can decide to abort the current message or try a different layout.
//!
//! ## Error Categories
//! - **Underflow**: a read needs more bytes than remain in the packet
//! - **Cursor Errors**: `seek`/`skip` targets outside the packet
//! - **Value Errors**: coordinates that do not fit the 16-bit wire width
//! - **Configuration Errors**: malformed or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use packet_reader::{InPacket, PacketError, PacketReader};
//!
//! let bytes = [0x01u8];
//! let mut packet = PacketReader::new(&bytes);
//!
//! match packet.read_int() {
//!     Err(PacketError::Underflow { needed, available, .. }) => {
//!         assert_eq!((needed, available), (4, 1));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! assert_eq!(packet.position(), 0);
//! ```

use std::io;
use thiserror::Error;

// PacketError is the single error type for all decoding operations
#[derive(Error, Debug)]
pub enum PacketError {
    #[error("Packet underflow: need {needed} bytes at position {position}, {available} available")]
    Underflow {
        needed: usize,
        available: usize,
        position: usize,
    },

    #[error("Invalid seek target {target} (packet length {length})")]
    InvalidSeek { target: usize, length: usize },

    #[error("Invalid skip of {count} bytes from position {position} (packet length {length})")]
    InvalidSkip {
        count: usize,
        position: usize,
        length: usize,
    },

    #[error("Coordinate {axis}={value} does not fit in 16 bits")]
    CoordinateOutOfRange { axis: &'static str, value: i64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PacketError {
    /// Whether the error was caused by running out of packet bytes.
    pub fn is_underflow(&self) -> bool {
        matches!(self, PacketError::Underflow { .. })
    }
}

/// Type alias for Results using PacketError
pub type Result<T> = std::result::Result<T, PacketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message() {
        let err = PacketError::Underflow {
            needed: 8,
            available: 3,
            position: 5,
        };
        assert!(err.is_underflow());
        assert_eq!(
            err.to_string(),
            "Packet underflow: need 8 bytes at position 5, 3 available"
        );
    }

    #[test]
    fn test_cursor_errors_are_not_underflow() {
        let err = PacketError::InvalidSeek {
            target: 10,
            length: 4,
        };
        assert!(!err.is_underflow());
        assert_eq!(err.to_string(), "Invalid seek target 10 (packet length 4)");
    }
}
