/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A streaming PPM decoder and encoder
//!
//! This crate features a decoder for the P3 (ASCII) and P6 (binary)
//! Portable Pixmap formats together with a matching encoder.
//!
//! The decoder reads its input exactly once, a byte at a time with no
//! lookahead or pushback, so it works on non-seekable streams.
//!
//! # Supported formats
//! - P3, ASCII-decimal pixel triples
//! - P6, raw binary byte triples
//!
//! # Unsupported formats
//! - P1/P2/P4/P5 and P7 variants
//! - `#` comments inside the header
//! - Multi-byte (16 bit) binary samples

pub use crate::decoder::{probe_ppm, PpmDecoder};
pub use crate::encoder::{PpmEncodeErrors, PpmEncoder, PpmVersion};
pub use crate::errors::PpmDecodeErrors;

mod decoder;
mod encoder;
mod errors;
