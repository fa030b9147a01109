//! # Core Decoding Components
//!
//! Low-level packet decoding and the wire format every message parser relies on.
//!
//! This module provides the sequential cursor used to turn a packet payload into
//! typed values. Transport framing, compression and encryption are expected to be
//! removed before a payload reaches this layer.
//!
//! ## Components
//! - **Reader**: `InPacket` decoding contract and its `PacketReader` implementation
//! - **Point**: two-axis 16-bit coordinate decoded from four bytes
//! - **Text**: single-byte character decoding for length-prefixed strings
//!
//! ## Wire Format
//! ```text
//! byte   : [i8]
//! short  : [i16 LE]
//! int    : [i32 LE]
//! long   : [i64 LE]
//! point  : [x: i16 LE] [y: i16 LE]
//! string : [Length: u16 LE] [Chars(Length)]
//! ```
//!
//! ## Safety
//! - Reads never go past the end of the payload
//! - Failed operations leave the cursor where it was

pub mod point;
pub mod reader;
pub mod text;
