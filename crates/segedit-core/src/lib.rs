//! SegEdit Core - Foundation types for segment editing
//!
//! This crate provides the fundamental types used throughout SegEdit:
//! - Millisecond time rendering (`HH:MM:SS.mmm`) and parsing
//! - The shared error type

pub mod error;
pub mod time;

pub use error::{Result, SegEditError};
pub use time::{format_millis, format_millis_f64, millis_to_seconds, parse_time};
