//! Pipeline conversions module
//!
//! This module contains the orchestration for padding photospheres.

mod pad_pipeline;


pub use pad_pipeline::{PadPipeline, pad};
