/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In place operations on pixel buffers
//!
//! Each filter is a free function over raw bytes, exposed as a method
//! on [`PixelBuffer`](crate::image::PixelBuffer).
pub mod fill;
pub mod flip;
pub mod gamma;
