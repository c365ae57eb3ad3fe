/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory pixel buffer with plain text netpbm reading and writing
//!
//! A [`PixelBuffer`] holds `width * height` pixels whose layout follows its
//! [`ImageKind`]:
//!
//! | Kind        | Bytes per pixel | File tag | Extension |
//! |-------------|-----------------|----------|-----------|
//! | `Bitmap`    | 1, `0` or `1`   | `P1`     | `.pbm`    |
//! | `Greyscale` | 1               | `P2`     | `.pgm`    |
//! | `Color`     | 3, R,G,B        | `P3`     | `.ppm`    |
//!
//! Pixels are read and written as [`Color`] values with bounds checked
//! accessors, whole buffers can be filled, gamma corrected and flipped
//! vertically, then saved or loaded as plain text netpbm.
//!
//! Every fallible operation returns an [`ImageErrors`], nothing panics
//! or exits on bad input.
//!
//! # Example
//! ```
//! use easyppm::{Color, ImageKind, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(2, 2, ImageKind::Color).unwrap();
//! image.fill(Color::rgb(255, 0, 0)).unwrap();
//! image.set(1, 1, Color::from_f32(0.0, 0.0, 1.0)).unwrap();
//! image.gamma_correct(2.2).unwrap();
//!
//! let text = image.encode_to_vec().unwrap();
//! let decoded = PixelBuffer::decode(&text).unwrap();
//!
//! assert_eq!(decoded, image);
//! ```
//!
//! # Features
//! - `log`: Forward internal log statements to the `log` crate
//! - `serde-support`: Serialize [`ImageMetadata`], [`ImageKind`] and [`Origin`]
pub use easyppm_core;
pub use easyppm_core::kind::{ImageKind, Origin};
pub use easyppm_core::options::{DecoderOptions, EncoderOptions};
pub use easyppm_pnm;

pub use crate::color::Color;
pub use crate::errors::ImageErrors;
pub use crate::image::PixelBuffer;
pub use crate::metadata::ImageMetadata;
pub use crate::path::validate_extension;

pub mod codecs;
pub mod color;
pub mod errors;
pub mod filters;
pub mod image;
pub mod metadata;
pub mod path;
