/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flip filter: reverse the order of rows
use crate::image::PixelBuffer;

/// Flip an image on the horizontal axis
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │k l m n o │
/// │f g h i j│   │f g h i j │
/// │k l m n o│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
/// `stride` is the number of bytes in one row
pub fn vertical_flip(pixels: &mut [u8], stride: usize) {
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point.
    // For an odd number of rows the middle one is never
    // part of a full chunk on either side and stays put
    let len = pixels.len();

    let (top, bottom) = pixels.split_at_mut(len / 2);

    for (t, b) in top
        .chunks_exact_mut(stride)
        .zip(bottom.rchunks_exact_mut(stride))
    {
        t.swap_with_slice(b);
    }
}

impl PixelBuffer {
    /// Reverse the row order in place
    ///
    /// Converts between upper left and lower left origin conventions,
    /// the buffer [`origin`](PixelBuffer::origin) tag is not changed
    pub fn invert_y(&mut self) {
        let stride = self.width() * self.kind().num_components();
        vertical_flip(self.data_mut(), stride);
    }
}
