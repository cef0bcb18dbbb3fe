//! Pad configuration types

/// Quality used by the reference JPEG encoder when none is given.
pub const DEFAULT_QUALITY: u8 = 75;

/// Configuration for photosphere padding
#[derive(Debug, Clone)]
pub struct PadConfig {
    /// JPEG quality of the padded output (1-100)
    pub quality: u8,
    /// Largest canvas width or height accepted before allocation
    pub max_dimension: Option<u32>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_dimension: None,
        }
    }
}

impl PadConfig {
    pub fn builder() -> PadConfigBuilder {
        PadConfigBuilder::default()
    }

    /// Quality clamped to the range the encoder accepts.
    pub fn effective_quality(&self) -> u8 {
        self.quality.clamp(1, 100)
    }
}

/// Builder for PadConfig
#[derive(Default)]
pub struct PadConfigBuilder {
    quality: Option<u8>,
    max_dimension: Option<Option<u32>>,
}

impl PadConfigBuilder {
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn max_dimension(mut self, max_dimension: Option<u32>) -> Self {
        self.max_dimension = Some(max_dimension);
        self
    }

    pub fn build(self) -> PadConfig {
        let default = PadConfig::default();
        PadConfig {
            quality: self.quality.unwrap_or(default.quality),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
