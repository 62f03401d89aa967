/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A kernel as written on the command line
#[derive(Clone, Debug, PartialEq)]
pub struct KernelArg {
    pub width:   usize,
    pub height:  usize,
    pub weights: Vec<f64>
}

/// Parse `WxH:k1,k2,...`
///
/// Only the syntax is checked here, the convolution validates the shape.
pub fn parse_kernel(input: &str) -> Result<KernelArg, String> {
    let (dims, weights) = input
        .split_once(':')
        .ok_or_else(|| format!("Expected WxH:k1,k2,... but found {input}"))?;

    let (width, height) = dims
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected kernel dimensions as WxH but found {dims}"))?;

    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid kernel width {width}: {e}"))?;
    let height = height
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid kernel height {height}: {e}"))?;

    let weights = weights
        .split(',')
        .map(|w| {
            w.trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid kernel weight {w}: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    Ok(KernelArg {
        width,
        height,
        weights
    })
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::arg_parsers::parse_kernel;

    #[test]
    fn parses_a_kernel() {
        let kernel = parse_kernel("3x1:0.25, 0.5,0.25").unwrap();
        assert_eq!((kernel.width, kernel.height), (3, 1));
        assert_eq!(kernel.weights, [0.25, 0.5, 0.25]);
    }

    #[test]
    fn rejects_bad_syntax() {
        assert!(parse_kernel("3x3").is_err());
        assert!(parse_kernel("3:1,2,3").is_err());
        assert!(parse_kernel("3x1:1,two,3").is_err());
    }
}
