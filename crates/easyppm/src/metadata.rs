/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
use easyppm_core::kind::{ImageKind, Origin};

/// Layout information about a pixel buffer
///
/// With the `serde-support` feature this serializes to e.g.
/// `{"width":2,"height":1,"kind":"Color","origin":"UpperLeft"}`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ImageMetadata {
    pub width:  usize,
    pub height: usize,
    pub kind:   ImageKind,
    pub origin: Origin
}
