/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the easyppm crates
//!
//! This crate provides the pieces shared by the plain text netpbm
//! codec and the pixel buffer built on top of it.
//!
//! It currently contains
//!
//! - Image kind and origin information shared by buffers and the codec
//! - A small text reader used to walk whitespace separated netpbm tokens
//! - Decoder and encoder options
//! - Logging shims that forward to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Forward the crate log macros to the [`log`](https://docs.rs/log) crate,
//!     without it the macros expand to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod kind;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod serde;

#[cfg(feature = "log")]
pub use ::log;
