/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Image fidelity metrics over decoded rasters
//!
//! Mean squared error and peak signal-to-noise ratio between two
//! rasters of equal dimensions. Each channel is normalized by its own
//! raster's maximum sample value before comparison, so rasters of
//! differing bit depth compare meaningfully.

use std::fmt::{Debug, Formatter};

use log::trace;

use peaksnr_core::raster::Raster;

/// Errors from comparing two rasters
pub enum MetricErrors {
    /// The rasters do not have the same width and height
    DimensionMismatch {
        first:  (usize, usize),
        second: (usize, usize)
    }
}

impl Debug for MetricErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricErrors::DimensionMismatch { first, second } => {
                writeln!(
                    f,
                    "Picture sizes don't match, {}x{} vs {}x{}",
                    first.0, first.1, second.0, second.1
                )
            }
        }
    }
}

/// Compute the mean squared error between two rasters.
///
/// For every pixel position each channel is divided by its own raster's
/// maximum sample value, the squared differences of the three channel
/// pairs are averaged, and the per-pixel means are averaged over the
/// whole image.
///
/// Two empty rasters of equal dimensions have an MSE of zero.
///
/// # Errors
/// [`MetricErrors::DimensionMismatch`] when the rasters differ in
/// width or height.
pub fn mean_squared_error(first: &Raster, second: &Raster) -> Result<f64, MetricErrors> {
    if first.dimensions() != second.dimensions() {
        return Err(MetricErrors::DimensionMismatch {
            first:  first.dimensions(),
            second: second.dimensions()
        });
    }
    if first.is_empty() {
        return Ok(0.0);
    }
    let first_max = f64::from(first.max_sample());
    let second_max = f64::from(second.max_sample());

    let mut sum = 0.0;

    for (a, b) in first.pixels().iter().zip(second.pixels()) {
        let mut pixel_error = 0.0;

        for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
            let diff = f64::from(x) / first_max - f64::from(y) / second_max;
            pixel_error += diff * diff;
        }
        sum += pixel_error / 3.0;
    }
    let mse = sum / first.len() as f64;

    trace!("MSE: {}", mse);

    Ok(mse)
}

/// Compute the peak signal-to-noise ratio, `-10 * log10(MSE)`, between
/// two rasters.
///
/// Identical rasters have an MSE of zero and a PSNR of
/// [`f64::INFINITY`], never an arithmetic error.
///
/// # Errors
/// [`MetricErrors::DimensionMismatch`] when the rasters differ in
/// width or height.
pub fn peak_signal_to_noise_ratio(first: &Raster, second: &Raster) -> Result<f64, MetricErrors> {
    let mse = mean_squared_error(first, second)?;

    Ok(-10.0 * mse.log10())
}
