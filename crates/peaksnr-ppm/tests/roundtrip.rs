/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use peaksnr_core::raster::{Pixel, Raster};
use peaksnr_ppm::{PpmDecoder, PpmEncodeErrors, PpmEncoder, PpmVersion};

fn sample_raster() -> Raster {
    let pixels = vec![
        Pixel::new(255, 0, 0),
        Pixel::new(0, 255, 0),
        Pixel::new(0, 0, 255),
        Pixel::new(1, 2, 3),
        Pixel::new(128, 128, 128),
        Pixel::new(0, 0, 0),
    ];
    Raster::new(3, 2, 255, pixels).unwrap()
}

fn round_trip(version: PpmVersion, raster: &Raster) -> Raster {
    let mut encoded = Vec::new();
    PpmEncoder::new(version, &mut encoded)
        .encode(raster)
        .unwrap();

    PpmDecoder::new(Cursor::new(encoded)).decode().unwrap()
}

#[test]
fn p3_round_trip() {
    let raster = sample_raster();

    assert_eq!(round_trip(PpmVersion::P3, &raster), raster);
}

#[test]
fn p6_round_trip() {
    let raster = sample_raster();

    assert_eq!(round_trip(PpmVersion::P6, &raster), raster);
}

#[test]
fn p3_round_trip_with_wide_samples() {
    // ASCII samples are not byte limited
    let raster = Raster::new(1, 1, 65535, vec![Pixel::new(1000, 0, 65535)]).unwrap();

    assert_eq!(round_trip(PpmVersion::P3, &raster), raster);
}

#[test]
fn p6_rejects_samples_wider_than_a_byte() {
    let raster = Raster::new(1, 1, 65535, vec![Pixel::new(1000, 0, 0)]).unwrap();
    let mut encoded = Vec::new();

    let err = PpmEncoder::new(PpmVersion::P6, &mut encoded)
        .encode(&raster)
        .unwrap_err();

    assert!(matches!(err, PpmEncodeErrors::SampleTooLarge(1000)));
}
