use tracing::{info, instrument};
use std::io::{Read, Write};
use std::path::Path;

use crate::photosphere::{
    common::error::{PadError, Result},
    compositor,
    jpeg::{JpegReader, JpegWriter, PadConfig, PanoramaReader, PanoramaWriter},
    xmp::{self, PanoramaGeometry},
};

/// Reads a photosphere from `input` and writes the padded 360x180 JPEG to
/// `output`, using the default configuration. Returns the geometry used for
/// placement, after any rescale.
pub fn pad(output: &mut dyn Write, input: &mut dyn Read) -> Result<PanoramaGeometry> {
    PadPipeline::new(PadConfig::default()).pad(output, input)
}

pub struct PadPipeline<R: PanoramaReader, W: PanoramaWriter> {
    reader: R,
    writer: W,
    config: PadConfig,
}

impl PadPipeline<JpegReader, JpegWriter> {
    pub fn new(config: PadConfig) -> Self {
        Self {
            reader: JpegReader,
            writer: JpegWriter,
            config,
        }
    }
}

impl<R: PanoramaReader, W: PanoramaWriter> PadPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PadConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Reads all of `input` into memory, then pads it.
    pub fn pad(&self, output: &mut dyn Write, input: &mut dyn Read) -> Result<PanoramaGeometry> {
        let input_data = {
            let _span = tracing::info_span!("read_input").entered();
            let mut buffer = Vec::new();
            input.read_to_end(&mut buffer)?;
            buffer
        };

        self.pad_bytes(&input_data, output)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn pad_bytes(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PanoramaGeometry> {
        info!("Starting photosphere padding");

        let mut geometry = {
            let _span = tracing::info_span!("extract_geometry").entered();
            xmp::extract_geometry(input_data)?
        };

        let source = {
            let _span = tracing::info_span!("decode_jpeg").entered();
            self.reader.read_image(input_data)?
        };

        let canvas = {
            let _span = tracing::info_span!("composite",
                width = source.width(),
                height = source.height()
            ).entered();
            compositor::pad_raster(&mut geometry, &source, self.config.max_dimension)?
        };

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            self.writer.write_image(&canvas, output, &self.config)?;
        }

        info!(
            width = canvas.width(),
            height = canvas.height(),
            left = geometry.crop_left,
            top = geometry.crop_top,
            "Padding complete"
        );
        Ok(geometry)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn pad_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PanoramaGeometry> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Padding file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PadError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Encode into memory first so failures never leave a truncated file behind.
        let mut encoded: Vec<u8> = Vec::new();
        let geometry = self.pad_bytes(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                PadError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(geometry)
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PadConfig) {
        self.config = config;
    }
}
