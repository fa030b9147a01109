//! # Packet Reader
//!
//! Sequential, little-endian decoding of inbound game protocol packets.
//!
//! A message parser receives a payload whose transport framing has already been
//! removed, binds a [`PacketReader`] to it and pulls typed fields off in wire
//! order through the [`InPacket`] contract.
//!
//! ## Example
//! ```rust
//! use packet_reader::{InPacket, PacketReader};
//!
//! // opcode, player id, then a chat line
//! let payload = [0x2A, 0x39, 0x30, 0x00, 0x00, 0x03, 0x00, b'g', b'g', b'!'];
//! let mut packet = PacketReader::new(&payload);
//!
//! let opcode = packet.read_byte()?;
//! let player = packet.read_int()?;
//! let line = packet.read_string()?;
//!
//! assert_eq!((opcode, player, line.as_str()), (42, 12_345, "gg!"));
//! # Ok::<(), packet_reader::PacketError>(())
//! ```
//!
//! ## Modules
//! - [`core`]: the decoding cursor, coordinates and text decoding
//! - [`config`]: reader and logging configuration
//! - [`error`]: the crate error type
//! - [`utils`]: logging setup

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::{LoggingConfig, PacketConfig, ReaderConfig};
pub use crate::core::point::Point;
pub use crate::core::reader::{InPacket, PacketReader};
pub use crate::core::text::TextEncoding;
pub use crate::error::{PacketError, Result};
