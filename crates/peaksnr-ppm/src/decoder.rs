/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, trace};

use peaksnr_core::bytesource::ByteSourceTrait;
use peaksnr_core::options::DecoderOptions;
use peaksnr_core::raster::{Pixel, Raster};

use crate::errors::PpmDecodeErrors;

/// Whitespace bytes that delimit tokens in a PPM stream.
///
/// This is the C `isspace` set, space, tab, newline, carriage return,
/// form feed and vertical tab. [`u8::is_ascii_whitespace`] leaves out
/// vertical tab so it cannot be used here.
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0c | 0x0b)
}

/// Probe some bytes to see if they consist of a PPM image
/// this crate can decode
pub fn probe_ppm(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"P3" || magic_bytes == b"P6" {
            // the header fields are delimiter terminated, so a third
            // byte must exist and must be whitespace
            if let Some(delimiter) = bytes.get(2) {
                return is_whitespace(*delimiter);
            }
        }
    }
    false
}

/// Decode phases.
///
/// Strictly sequential, a phase is never revisited once left.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Magic,
    Width,
    Height,
    MaxSample,
    TextSamples,
    BinarySamples
}

const fn header_field(phase: Phase) -> &'static str {
    match phase {
        Phase::Magic => "magic number",
        Phase::Width => "width",
        Phase::Height => "height",
        Phase::MaxSample => "maximum sample value",
        Phase::TextSamples | Phase::BinarySamples => "pixel data"
    }
}

/// A streaming PPM decoder.
///
/// The decoder pulls bytes out of a [`ByteSourceTrait`] exactly once,
/// left to right, with no pushback, and assembles a [`Raster`] or a
/// typed error. This makes it usable on non-seekable inputs, e.g pipes.
///
/// The header fields are all variable length and only terminated by a
/// delimiter, so the decoder tracks whether a token has started
/// independently of the phase it is in. A delimiter with no preceding
/// token content is a no-op, which is what makes runs of whitespace
/// between header fields legal and a field with the value zero
/// distinguishable from no field at all.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use peaksnr_ppm::PpmDecoder;
///
/// let decoder = PpmDecoder::new(Cursor::new(b"NOT VALID PPM"));
/// assert!(decoder.decode().is_err());
/// ```
pub struct PpmDecoder<T: ByteSourceTrait> {
    source:       T,
    options:      DecoderOptions,
    phase:        Phase,
    // set once a byte of the current token has been consumed,
    // cleared when a delimiter ends the token
    has_token:    bool,
    magic:        String,
    width:        usize,
    height:       usize,
    max_sample:   u32,
    // accumulator for the numeric token currently being read
    sample:       u32,
    sample_count: usize,
    pixel:        Pixel,
    pixels:       Vec<Pixel>
}

impl<T: ByteSourceTrait> PpmDecoder<T> {
    /// Create a new PPM decoder with default options
    ///
    /// # Arguments
    /// - `source`: The stream containing PPM encoded bytes
    pub fn new(source: T) -> PpmDecoder<T> {
        PpmDecoder::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - `source`: The stream containing PPM encoded bytes
    /// - `options`: Modified options for the decoder
    pub fn new_with_options(source: T, options: DecoderOptions) -> PpmDecoder<T> {
        PpmDecoder {
            source,
            options,
            phase: Phase::Magic,
            has_token: false,
            magic: String::new(),
            width: 0,
            height: 0,
            max_sample: 0,
            sample: 0,
            sample_count: 0,
            pixel: Pixel::default(),
            pixels: Vec::new()
        }
    }

    /// End the current token if one was started.
    ///
    /// Returns whether a token was in flight, callers only advance
    /// state when it was.
    fn end_token(&mut self) -> bool {
        let started = self.has_token;
        self.has_token = false;
        started
    }

    fn magic_byte(&mut self, byte: u8) {
        if is_whitespace(byte) {
            if self.end_token() {
                self.phase = Phase::Width;
            }
        } else {
            self.magic.push(char::from(byte));
            self.has_token = true;
        }
    }

    fn width_byte(&mut self, byte: u8) -> Result<(), PpmDecodeErrors> {
        if is_whitespace(byte) {
            if self.end_token() {
                if self.width > self.options.get_max_width() {
                    return Err(PpmDecodeErrors::TooLargeDimensions(
                        "width",
                        self.options.get_max_width(),
                        self.width
                    ));
                }
                self.phase = Phase::Height;
            }
        } else if byte.is_ascii_digit() {
            // if it overflows, we have bigger problems.
            self.width = self
                .width
                .wrapping_mul(10)
                .wrapping_add(usize::from(byte - b'0'));
            self.has_token = true;
        } else {
            return Err(PpmDecodeErrors::InvalidWidth(byte));
        }
        Ok(())
    }

    fn height_byte(&mut self, byte: u8) -> Result<(), PpmDecodeErrors> {
        if is_whitespace(byte) {
            if self.end_token() {
                if self.height > self.options.get_max_height() {
                    return Err(PpmDecodeErrors::TooLargeDimensions(
                        "height",
                        self.options.get_max_height(),
                        self.height
                    ));
                }
                self.phase = Phase::MaxSample;
            }
        } else if byte.is_ascii_digit() {
            self.height = self
                .height
                .wrapping_mul(10)
                .wrapping_add(usize::from(byte - b'0'));
            self.has_token = true;
        } else {
            return Err(PpmDecodeErrors::InvalidHeight(byte));
        }
        Ok(())
    }

    /// Read the maximum sample value and, on its terminating delimiter,
    /// pick the pixel data phase from the magic token.
    ///
    /// The delimiter that ends this field is the single whitespace byte
    /// separating the header from pixel data, the very next byte
    /// belongs to the body.
    fn max_sample_byte(&mut self, byte: u8) -> Result<(), PpmDecodeErrors> {
        if is_whitespace(byte) {
            if self.end_token() {
                self.phase = match self.magic.as_str() {
                    "P3" => Phase::TextSamples,
                    "P6" => Phase::BinarySamples,
                    _ => return Err(PpmDecodeErrors::InvalidMagic(self.magic.clone()))
                };
                info!("Magic: {}", self.magic);
                info!("Width: {}, height: {}", self.width, self.height);
                info!("Max sample value: {}", self.max_sample);
            }
        } else if byte.is_ascii_digit() {
            self.max_sample = self
                .max_sample
                .wrapping_mul(10)
                .wrapping_add(u32::from(byte - b'0'));
            self.has_token = true;
        } else {
            return Err(PpmDecodeErrors::InvalidMaxSample(byte));
        }
        Ok(())
    }

    fn text_byte(&mut self, byte: u8) -> Result<(), PpmDecodeErrors> {
        if is_whitespace(byte) {
            if self.end_token() {
                self.push_sample()?;
            }
        } else if byte.is_ascii_digit() {
            self.sample = self
                .sample
                .wrapping_mul(10)
                .wrapping_add(u32::from(byte - b'0'));
            self.has_token = true;
        } else {
            return Err(PpmDecodeErrors::InvalidPixelContent(byte));
        }
        Ok(())
    }

    fn binary_byte(&mut self, byte: u8) -> Result<(), PpmDecodeErrors> {
        self.sample = u32::from(byte);
        self.push_sample()
    }

    /// Finish the current sample, slotting it into the red, green or
    /// blue channel of the pixel being assembled. Completing the blue
    /// channel emits the pixel.
    fn push_sample(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.options.get_strict_mode() && self.sample > self.max_sample {
            return Err(PpmDecodeErrors::SampleOutOfRange(
                self.sample,
                self.max_sample
            ));
        }
        match self.sample_count % 3 {
            0 => self.pixel.r = self.sample,
            1 => self.pixel.g = self.sample,
            _ => {
                self.pixel.b = self.sample;
                self.pixels.push(self.pixel);
                self.pixel = Pixel::default();
            }
        }
        self.sample_count += 1;
        self.sample = 0;
        Ok(())
    }

    /// Decode the source into a raster, consuming the decoder.
    ///
    /// The source is read to its end in a single pass. On success the
    /// returned raster satisfies `len() == width * height`, on error
    /// nothing of the partial decode escapes.
    pub fn decode(mut self) -> Result<Raster, PpmDecodeErrors> {
        while let Some(byte) = self.source.next_byte()? {
            match self.phase {
                Phase::Magic => self.magic_byte(byte),
                Phase::Width => self.width_byte(byte)?,
                Phase::Height => self.height_byte(byte)?,
                Phase::MaxSample => self.max_sample_byte(byte)?,
                Phase::TextSamples => self.text_byte(byte)?,
                Phase::BinarySamples => self.binary_byte(byte)?
            }
        }

        match self.phase {
            Phase::TextSamples => {
                // end of stream finalizes a pending sample the same
                // way whitespace would
                if self.end_token() {
                    self.push_sample()?;
                }
            }
            Phase::BinarySamples => {}
            phase => return Err(PpmDecodeErrors::UnexpectedEof(header_field(phase)))
        }

        if self.sample_count % 3 != 0 {
            return Err(PpmDecodeErrors::IncompletePixel(self.sample_count));
        }
        if self.pixels.len() != self.width.saturating_mul(self.height) {
            return Err(PpmDecodeErrors::PixelCountMismatch {
                width:  self.width,
                height: self.height,
                found:  self.pixels.len()
            });
        }
        trace!("Decoded {} pixels", self.pixels.len());

        let raster = Raster::new(self.width, self.height, self.max_sample, self.pixels)?;

        Ok(raster)
    }
}
