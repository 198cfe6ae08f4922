/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use peaksnr_core::bytesource::ByteSourceError;
use peaksnr_core::raster::RasterErrors;

/// PPM errors that can occur during decoding
#[non_exhaustive]
pub enum PpmDecodeErrors {
    /// The header magic token is not exactly `P3` or `P6`
    InvalidMagic(String),
    /// A byte that is neither a digit nor whitespace inside the
    /// width field
    InvalidWidth(u8),
    /// A byte that is neither a digit nor whitespace inside the
    /// height field
    InvalidHeight(u8),
    /// A byte that is neither a digit nor whitespace inside the
    /// maximum sample value field
    InvalidMaxSample(u8),
    /// A byte that is neither a digit nor whitespace inside P3
    /// pixel data
    InvalidPixelContent(u8),
    /// The stream ended with a partial pixel, the sample count is
    /// not a multiple of three
    IncompletePixel(usize),
    /// The decoded pixel count differs from `width * height`
    PixelCountMismatch {
        width:  usize,
        height: usize,
        found:  usize
    },
    /// A sample greater than the declared maximum sample value was
    /// decoded, only reported in strict mode
    SampleOutOfRange(u32, u32),
    /// Too large dimensions for a given width or height
    TooLargeDimensions(&'static str, usize, usize),
    /// The stream ended while a header field was still being read
    UnexpectedEof(&'static str),
    /// The decoded fields cannot form a valid raster
    BadRaster(RasterErrors),
    /// The underlying byte source failed
    IoErrors(ByteSourceError)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(magic) => {
                writeln!(
                    f,
                    "Invalid magic number, found \"{magic}\", expected \"P3\" or \"P6\""
                )
            }
            Self::InvalidWidth(byte) => {
                writeln!(f, "Invalid width, found byte '{}'", char::from(*byte))
            }
            Self::InvalidHeight(byte) => {
                writeln!(f, "Invalid height, found byte '{}'", char::from(*byte))
            }
            Self::InvalidMaxSample(byte) => {
                writeln!(
                    f,
                    "Invalid maximum sample value, found byte '{}'",
                    char::from(*byte)
                )
            }
            Self::InvalidPixelContent(byte) => {
                writeln!(
                    f,
                    "Invalid pixel content, found byte '{}'",
                    char::from(*byte)
                )
            }
            Self::IncompletePixel(samples) => {
                writeln!(
                    f,
                    "Incomplete pixel, {samples} samples is not a multiple of three"
                )
            }
            Self::PixelCountMismatch {
                width,
                height,
                found
            } => {
                writeln!(
                    f,
                    "Pixel count doesn't match picture size, expected {width}x{height} = {} pixels but found {found}",
                    width.saturating_mul(*height)
                )
            }
            Self::SampleOutOfRange(sample, max_sample) => {
                writeln!(
                    f,
                    "Sample {sample} greater than the maximum sample value {max_sample}"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Self::UnexpectedEof(field) => {
                writeln!(f, "Unexpected end of stream while reading the {field}")
            }
            Self::BadRaster(err) => {
                write!(f, "{err:?}")
            }
            Self::IoErrors(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

impl From<ByteSourceError> for PpmDecodeErrors {
    fn from(value: ByteSourceError) -> Self {
        PpmDecodeErrors::IoErrors(value)
    }
}

impl From<RasterErrors> for PpmDecodeErrors {
    fn from(value: RasterErrors) -> Self {
        PpmDecodeErrors::BadRaster(value)
    }
}
