/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Bitmap, Graymap and Pixmap decoder and encoder
//!
//! The plain (ASCII) members of the netpbm family share one layout:
//!
//! ```text
//! <tag>
//! <width> <height> [<maxval>]
//! <pixel tokens...>
//! ```
//!
//! | Tag  | Kind      | Max value | Tokens per pixel |
//! |------|-----------|-----------|------------------|
//! | `P1` | Bitmap    | absent    | 1, `1` is black  |
//! | `P2` | Greyscale | present   | 1                |
//! | `P3` | Color     | present   | 3                |
//!
//! Tokens are separated by whitespace and `#` starts a comment that runs
//! to the end of the line. Pixels are stored row-major, top row first.
//!
//! Decoded bitmap samples use `0` for black and `1` for white, which is the
//! inverse of the on-disk token, so encoding then decoding is a fixed point.
//!
//! The binary variants (`P4`, `P5`, `P6`) are recognised and rejected.
//!
//! # Example
//! ```
//! use easyppm_pnm::PnmDecoder;
//! use easyppm_pnm::easyppm_core::kind::ImageKind;
//!
//! let mut decoder = PnmDecoder::new(b"P2\n2 1 255\n0 255\n");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(pixels, [0, 255]);
//! assert_eq!(decoder.get_kind(), Some(ImageKind::Greyscale));
//! ```
pub use decoder::*;
pub use easyppm_core;
pub use encoder::*;
pub use errors::*;

mod decoder;
mod encoder;
mod errors;
