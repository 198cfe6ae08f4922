/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use peaksnr_core::options::DecoderOptions;
use peaksnr_core::raster::RasterErrors;
use peaksnr_ppm::{PpmDecodeErrors, PpmDecoder};

fn decode_err(data: &[u8]) -> PpmDecodeErrors {
    PpmDecoder::new(Cursor::new(data)).decode().unwrap_err()
}

#[test]
fn rejects_unknown_magic() {
    let err = decode_err(b"P5 1 1 255\n0");

    assert!(matches!(err, PpmDecodeErrors::InvalidMagic(magic) if magic == "P5"));
}

#[test]
fn rejects_letter_in_width() {
    let err = decode_err(b"P3 1x0 1 255\n0 0 0\n");

    assert!(matches!(err, PpmDecodeErrors::InvalidWidth(b'x')));
}

#[test]
fn rejects_letter_in_height() {
    let err = decode_err(b"P3 1 2h 255\n0 0 0\n");

    assert!(matches!(err, PpmDecodeErrors::InvalidHeight(b'h')));
}

#[test]
fn rejects_letter_in_max_sample() {
    let err = decode_err(b"P3 1 1 2ff\n0 0 0\n");

    assert!(matches!(err, PpmDecodeErrors::InvalidMaxSample(b'f')));
}

#[test]
fn rejects_garbage_in_text_pixel_data() {
    let err = decode_err(b"P3 1 1 255\n12 a 3\n");

    assert!(matches!(err, PpmDecodeErrors::InvalidPixelContent(b'a')));
}

#[test]
fn rejects_trailing_partial_pixel() {
    // four samples, one dangling past the last complete triple
    let err = decode_err(b"P3 1 1 255\n1 2 3 4\n");

    assert!(matches!(err, PpmDecodeErrors::IncompletePixel(4)));
}

#[test]
fn rejects_pixel_count_short_of_dimensions() {
    let err = decode_err(b"P3 2 2 255\n1 2 3\n");

    assert!(matches!(
        err,
        PpmDecodeErrors::PixelCountMismatch {
            width: 2,
            height: 2,
            found: 1
        }
    ));
}

#[test]
fn rejects_pixel_count_beyond_dimensions() {
    let err = decode_err(b"P3 1 1 255\n1 2 3 4 5 6\n");

    assert!(matches!(
        err,
        PpmDecodeErrors::PixelCountMismatch { found: 2, .. }
    ));
}

#[test]
fn rejects_incomplete_binary_pixel() {
    let mut data = b"P6 1 1 255\n".to_vec();
    data.extend_from_slice(&[1, 2, 3, 4]);

    let err = decode_err(&data);

    assert!(matches!(err, PpmDecodeErrors::IncompletePixel(4)));
}

#[test]
fn rejects_binary_count_mismatch() {
    let mut data = b"P6 2 1 255\n".to_vec();
    data.extend_from_slice(&[1, 2, 3]);

    let err = decode_err(&data);

    assert!(matches!(
        err,
        PpmDecodeErrors::PixelCountMismatch { found: 1, .. }
    ));
}

#[test]
fn rejects_truncated_header() {
    let err = decode_err(b"P3 2 2");

    assert!(matches!(err, PpmDecodeErrors::UnexpectedEof("height")));
}

#[test]
fn rejects_empty_input() {
    let err = decode_err(b"");

    assert!(matches!(err, PpmDecodeErrors::UnexpectedEof("magic number")));
}

#[test]
fn rejects_zero_max_sample() {
    let err = decode_err(b"P3 1 1 0\n1 2 3\n");

    assert!(matches!(
        err,
        PpmDecodeErrors::BadRaster(RasterErrors::ZeroMaxSample)
    ));
}

#[test]
fn rejects_too_large_width() {
    let options = DecoderOptions::default().set_max_width(4);
    let decoder = PpmDecoder::new_with_options(Cursor::new(b"P3 5 1 255\n"), options);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        PpmDecodeErrors::TooLargeDimensions("width", 4, 5)
    ));
}

#[test]
fn strict_mode_rejects_sample_above_max_sample() {
    let options = DecoderOptions::default().set_strict_mode(true);
    let decoder = PpmDecoder::new_with_options(Cursor::new(b"P3 1 1 10\n300 0 0\n"), options);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::SampleOutOfRange(300, 10)));
}
