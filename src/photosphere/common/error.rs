use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("Failed to read input: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Corrupt segment at offset {offset}: {reason}")]
    CorruptSegment { offset: u64, reason: String },

    #[error("image provided had no photo sphere metadata")]
    MetadataNotFound,

    #[error("Failed to decode JPEG image: {0}")]
    DecodeError(String),

    #[error("Failed to encode JPEG image: {0}")]
    EncodeError(String),

    #[error("Invalid panorama geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid canvas dimensions: width={0}, height={1}")]
    InvalidDimensions(u64, u64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PadError>;
