/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use tinypnm_image::core_filters::grayscale::{GrayscaleMethod, LumaCoefficients};
use tinypnm_imageprocs::convolve::BoundaryPolicy;

use crate::cmd_args::arg_parsers::{parse_kernel, KernelArg};

pub mod arg_parsers;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GrayscaleArg {
    Average,
    Weighted
}

impl ValueEnum for GrayscaleArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Average, Self::Weighted]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Average => PossibleValue::new("average").help("Mean of the three channels"),
            Self::Weighted => {
                PossibleValue::new("weighted").help("Weighted sum, see --coefficients")
            }
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CoefficientsArg {
    Rec601,
    GreenHeavy
}

impl CoefficientsArg {
    pub const fn to_coefficients(self) -> LumaCoefficients {
        match self {
            Self::Rec601 => LumaCoefficients::REC601,
            Self::GreenHeavy => LumaCoefficients::GREEN_HEAVY
        }
    }
}

impl ValueEnum for CoefficientsArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Rec601, Self::GreenHeavy]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Rec601 => PossibleValue::new("rec601").help("0.299 R + 0.587 G + 0.114 B"),
            Self::GreenHeavy => PossibleValue::new("green-heavy").help("0.35 R + 0.50 G + 0.15 B")
        })
    }
}

/// Resolve the grayscale reduction from the parsed arguments
///
/// Returns `None` for a weighted reduction without coefficients.
pub fn grayscale_method(
    grayscale: GrayscaleArg, coefficients: Option<CoefficientsArg>
) -> Option<GrayscaleMethod> {
    match (grayscale, coefficients) {
        (GrayscaleArg::Average, _) => Some(GrayscaleMethod::Average),
        (GrayscaleArg::Weighted, Some(c)) => {
            Some(GrayscaleMethod::Weighted(c.to_coefficients()))
        }
        (GrayscaleArg::Weighted, None) => None
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoundaryArg {
    Zero,
    Replicate
}

impl BoundaryArg {
    pub const fn to_policy(self) -> BoundaryPolicy {
        match self {
            Self::Zero => BoundaryPolicy::Zero,
            Self::Replicate => BoundaryPolicy::Replicate
        }
    }
}

impl ValueEnum for BoundaryArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Zero, Self::Replicate]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Zero => PossibleValue::new("zero").help("Pixels outside the image are zero"),
            Self::Replicate => {
                PossibleValue::new("replicate").help("Pixels outside take the nearest edge value")
            }
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("tinypnm")
        .about("Convert binary PPM images to grayscale PGM images and transform them")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input P6 file to read data from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output P5 file to write the grayscale image to")
            .required_unless_present("probe"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the input header as JSON and exit"))
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
            .help("Refuse to decode images wider than this, unlimited by default")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse to decode images taller than this, unlimited by default")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat bytes after the pixel data as an error"))
        .arg(Arg::new("grayscale")
            .long("grayscale")
            .help_heading("GRAYSCALE")
            .help("How color pixels are reduced to a gray level")
            .value_parser(value_parser!(GrayscaleArg))
            .default_value("average"))
        .arg(Arg::new("coefficients")
            .long("coefficients")
            .help_heading("GRAYSCALE")
            .help("Channel weights used by the weighted reduction")
            .value_parser(value_parser!(CoefficientsArg))
            .required_if_eq("grayscale", "weighted"))
        .arg(Arg::new("keep-gray")
            .long("keep-gray")
            .help_heading("GRAYSCALE")
            .help("Also write the reduced color image to this P6 file"))
        .arg(Arg::new("equalize")
            .long("equalize")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Equalize the histogram of the grayscale image"))
        .arg(Arg::new("gamma")
            .long("gamma")
            .help_heading("OPERATIONS")
            .help("Gamma correct the grayscale image, levels become v^(1/gamma)")
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("convolve")
            .long("convolve")
            .help_heading("OPERATIONS")
            .help("Convolve with a kernel, written as WxH:k1,k2,...")
            .long_help("Convolve the grayscale image with a row major kernel.\nThe kernel is written as WxH:k1,k2,... with odd W and H and W*H weights, e.g 3x1:0.25,0.5,0.25")
            .value_parser(parse_kernel))
        .arg(Arg::new("boundary")
            .long("boundary")
            .help_heading("OPERATIONS")
            .help("What pixels outside the image read as during convolution")
            .value_parser(value_parser!(BoundaryArg))
            .default_value("zero"))
        .arg(Arg::new("otsu")
            .long("otsu")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Binarize the grayscale image with Otsu's threshold"))
}

/// Read the kernel passed via `--convolve`
pub fn get_kernel(args: &clap::ArgMatches) -> Option<&KernelArg> {
    args.get_one::<KernelArg>("convolve")
}
