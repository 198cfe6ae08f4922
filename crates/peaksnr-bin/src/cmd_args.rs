/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("peaksnr")
        .about("Compute the PSNR between two PPM (P3/P6) pictures")
        .arg(Arg::new("first")
            .help("First picture to compare")
            .required(true))
        .arg(Arg::new("second")
            .help("Second picture to compare")
            .required(true))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum image width the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum image height the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject samples greater than the declared maximum sample value"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn verify_cli() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn two_pictures_are_required() {
        let result = create_cmd_args().try_get_matches_from(["peaksnr", "a.ppm"]);

        assert!(result.is_err());
    }
}
