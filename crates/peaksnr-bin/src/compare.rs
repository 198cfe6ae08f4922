/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io;
use std::io::BufReader;

use clap::ArgMatches;
use log::info;

use peaksnr_core::options::DecoderOptions;
use peaksnr_core::raster::Raster;
use peaksnr_metrics::{peak_signal_to_noise_ratio, MetricErrors};
use peaksnr_ppm::{PpmDecodeErrors, PpmDecoder};

use crate::cmd_parsers::get_decoder_options;

pub(crate) enum CmdErrors {
    /// Could not open the 1st/2nd picture
    FailedToOpen(&'static str, String, io::Error),
    /// Could not parse the 1st/2nd picture
    FailedToParse(&'static str, String, PpmDecodeErrors),
    /// The pictures cannot be compared
    Metric(MetricErrors)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CmdErrors::FailedToOpen(which, path, err) => {
                writeln!(f, "Failed to open {which} picture \"{path}\": {err}")
            }
            CmdErrors::FailedToParse(which, path, err) => {
                write!(f, "Failed to parse {which} picture \"{path}\": {err:?}")
            }
            CmdErrors::Metric(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

pub(crate) fn compare_files(options: &ArgMatches) -> Result<(), CmdErrors> {
    let decoder_options = get_decoder_options(options);

    let first = options.get_one::<String>("first").unwrap();
    let second = options.get_one::<String>("second").unwrap();

    let first_raster = decode_picture("1st", first, decoder_options)?;
    let second_raster = decode_picture("2nd", second, decoder_options)?;

    let psnr =
        peak_signal_to_noise_ratio(&first_raster, &second_raster).map_err(CmdErrors::Metric)?;

    // identical pictures print "inf"
    println!("{}", psnr);

    Ok(())
}

fn decode_picture(
    which: &'static str, path: &str, options: DecoderOptions
) -> Result<Raster, CmdErrors> {
    info!("Decoding {}", path);

    let file = File::open(path)
        .map_err(|err| CmdErrors::FailedToOpen(which, path.to_string(), err))?;

    // the handle is scoped to this call and closed on every exit path
    // once the decoder is dropped
    PpmDecoder::new_with_options(BufReader::new(file), options)
        .decode()
        .map_err(|err| CmdErrors::FailedToParse(which, path.to_string(), err))
}
