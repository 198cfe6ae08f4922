/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

mod cmd_args;
mod cmd_parsers;
mod compare;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    if let Err(reason) = compare::compare_files(&options) {
        // failures always go to stderr, the PSNR owns stdout
        eprint!("error: {:?}", reason);
        exit(-1);
    }
}
