/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all peaksnr crates
//!
//! This crate provides the small set of types shared by the
//! decoders and the metrics under the `peaksnr` umbrella
//!
//! It currently contains
//!
//! - A forward-only byte source trait with implementations for
//!   in-memory buffers and buffered readers
//! - The `Raster` image representation produced by decoders and
//!   consumed by the metrics
//! - Decoder options

pub mod bytesource;
pub mod options;
pub mod raster;
