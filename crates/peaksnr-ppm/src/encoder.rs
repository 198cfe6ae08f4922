/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use peaksnr_core::raster::Raster;

/// Errors occurring during encoding
pub enum PpmEncodeErrors {
    Static(&'static str),
    /// A sample does not fit in a single byte, P6 only
    SampleTooLarge(u32),
    IoErrors(io::Error)
}

impl From<io::Error> for PpmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PpmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PpmEncodeErrors::Static(err) => {
                writeln!(f, "{err}")
            }
            PpmEncodeErrors::SampleTooLarge(sample) => {
                writeln!(
                    f,
                    "Sample {sample} does not fit in a single byte, P6 samples must be 0-255"
                )
            }
            PpmEncodeErrors::IoErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

/// Format versions the encoder can write
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PpmVersion {
    P3,
    P6
}

impl Display for PpmVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P3 => write!(f, "P3"),
            Self::P6 => write!(f, "P6")
        }
    }
}

/// A PPM encoder.
///
/// Writes a [`Raster`] out as P3 (ASCII) or P6 (binary) such that the
/// decoder in this crate reads it back unchanged.
pub struct PpmEncoder<'a, W: Write> {
    version: PpmVersion,
    writer:  &'a mut W
}

impl<'a, W: Write> PpmEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(version: PpmVersion, writer: &'a mut W) -> PpmEncoder<'a, W> {
        Self { version, writer }
    }

    /// Write headers for the P3 and P6 formats.
    ///
    /// The trailing newline is the single whitespace byte separating
    /// the maximum sample value from the pixel data.
    fn write_headers(&mut self, raster: &Raster) -> Result<(), PpmEncodeErrors> {
        let header = format!(
            "{}\n{} {}\n{}\n",
            self.version,
            raster.width(),
            raster.height(),
            raster.max_sample()
        );

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode a raster into the writer
    pub fn encode(&mut self, raster: &Raster) -> Result<(), PpmEncodeErrors> {
        self.write_headers(raster)?;

        match self.version {
            PpmVersion::P3 => {
                for pixel in raster.pixels() {
                    writeln!(self.writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
                }
            }
            PpmVersion::P6 => {
                for pixel in raster.pixels() {
                    let mut triple = [0_u8; 3];

                    for (slot, sample) in triple.iter_mut().zip([pixel.r, pixel.g, pixel.b]) {
                        *slot = u8::try_from(sample)
                            .map_err(|_| PpmEncodeErrors::SampleTooLarge(sample))?;
                    }
                    self.writer.write_all(&triple)?;
                }
            }
        }
        Ok(())
    }
}
