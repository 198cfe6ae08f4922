/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder options

/// Options a decoder respects when reading an image.
///
/// The setters are chainable
///
/// ```
/// use peaksnr_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(true);
///
/// assert_eq!(options.get_max_width(), 1024);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width the decoder accepts, images declaring a
    /// larger width are rejected.
    ///
    /// - Default value: 2^17 (131072)
    max_width:   usize,
    /// Maximum height the decoder accepts.
    ///
    /// - Default value: 2^17 (131072)
    max_height:  usize,
    /// Whether samples greater than the declared maximum sample
    /// value are an error.
    ///
    /// - Default value: false, such samples are passed through
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:   1 << 17,
            max_height:  1 << 17,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    pub fn set_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}
