//! # Utility Modules
//!
//! Supporting utilities shared by the decoding core.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup driven by `LoggingConfig`

pub mod logging;
