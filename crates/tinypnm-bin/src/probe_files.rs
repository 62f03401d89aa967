/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::ArgMatches;
use tinypnm_image::codecs::ppm::probe;
use tinypnm_image::errors::ImageErrors;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

/// Probe the input file, extract metadata, and print it to standard output.
pub fn probe_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let Some(in_file) = args.get_one::<String>("in") else {
        return Err(ImageErrors::GenericStr("No input file to probe"));
    };
    let data = std::fs::read(in_file).map_err(ImageErrors::OpenFailed)?;

    let metadata = probe(&data, get_decoder_options(cmd_opts))?;
    let real_metadata = Metadata::new(OsString::from(in_file), data.len() as u64, &metadata);

    let json = serde_json::to_string_pretty(&real_metadata)
        .map_err(|e| ImageErrors::GenericString(e.to_string()))?;

    println!("{json}");

    Ok(())
}
