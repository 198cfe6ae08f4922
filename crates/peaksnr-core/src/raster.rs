/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The decoded image representation shared by decoders and metrics

use std::fmt::{Debug, Formatter};
use std::ops::Index;

/// A single RGB pixel.
///
/// Samples are unsigned and not bounded by the type itself, whether a
/// sample is legal relative to a raster's maximum sample value is the
/// concern of whoever consumes the raster.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Pixel {
    pub r: u32,
    pub g: u32,
    pub b: u32
}

impl Pixel {
    pub const fn new(r: u32, g: u32, b: u32) -> Pixel {
        Pixel { r, g, b }
    }
}

/// Errors from constructing a raster with inconsistent fields
pub enum RasterErrors {
    /// Pixel buffer length doesn't match `width * height`
    WrongPixelCount(usize, usize),
    /// The maximum sample value must be at least one
    ZeroMaxSample
}

impl Debug for RasterErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterErrors::WrongPixelCount(expected, found) => {
                writeln!(
                    f,
                    "Wrong pixel count, expected {expected} pixels but found {found}"
                )
            }
            RasterErrors::ZeroMaxSample => {
                writeln!(f, "Maximum sample value of zero is not allowed")
            }
        }
    }
}

/// A decoded image.
///
/// Holds the dimensions, the declared maximum sample value and the
/// pixels in row-major order, first pixel top-left.
///
/// A raster is produced whole by [`Raster::new`] and is immutable from
/// then on, the invariant `pixels.len() == width * height` always holds
/// for a constructed raster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster {
    width:      usize,
    height:     usize,
    max_sample: u32,
    pixels:     Vec<Pixel>
}

impl Raster {
    /// Create a new raster.
    ///
    /// # Errors
    /// - [`RasterErrors::WrongPixelCount`]: `pixels` does not contain
    ///   exactly `width * height` pixels
    /// - [`RasterErrors::ZeroMaxSample`]: `max_sample` is zero
    pub fn new(
        width: usize, height: usize, max_sample: u32, pixels: Vec<Pixel>
    ) -> Result<Raster, RasterErrors> {
        if max_sample == 0 {
            return Err(RasterErrors::ZeroMaxSample);
        }
        // saturating since a product that overflows usize can never be
        // matched by an in-memory buffer anyway
        let expected = width.saturating_mul(height);

        if pixels.len() != expected {
            return Err(RasterErrors::WrongPixelCount(expected, pixels.len()));
        }

        Ok(Raster {
            width,
            height,
            max_sample,
            pixels
        })
    }

    /// Return the image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Return the image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return the width and height as a pair
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Return the declared maximum sample value
    pub const fn max_sample(&self) -> u32 {
        self.max_sample
    }
    /// Return the number of pixels, always `width * height`
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    /// Return the pixel at a row-major linear index, or `None` when the
    /// index is out of bounds
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        self.pixels.get(index).copied()
    }
    /// Return all pixels in row-major order
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Index<usize> for Raster {
    type Output = Pixel;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pixels[index]
    }
}
