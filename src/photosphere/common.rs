//! Common utilities module
//!
//! This module contains shared utilities used across the photosphere pipeline.

pub mod error;

pub use error::{PadError, Result};
