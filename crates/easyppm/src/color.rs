/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

use easyppm_core::kind::ImageKind;

use crate::errors::ImageErrors;

/// An 8 bit per channel R,G,B color
///
/// Single channel images read back colors with all channels equal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Color {
    pub const BLACK: Color = Color::grey(0);
    pub const WHITE: Color = Color::grey(255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// A color with all three channels set to `value`
    pub const fn grey(value: u8) -> Color {
        Color::rgb(value, value, value)
    }

    /// A bitmap color, `0` is black and `1` is white
    ///
    /// # Errors
    /// `InvalidColor` for any other value
    pub fn black_white(bw: u8) -> Result<Color, ImageErrors> {
        match bw {
            0 | 1 => Ok(Color::grey(bw)),
            _ => Err(ImageErrors::InvalidColor(Color::grey(bw), ImageKind::Bitmap))
        }
    }

    /// Convert floating point channels in `0.0..=1.0` to bytes
    ///
    /// Values outside the range saturate to 0 or 255, `NaN` maps to 0.
    pub fn from_f32(r: f32, g: f32, b: f32) -> Color {
        Color::rgb(f32_to_channel(r), f32_to_channel(g), f32_to_channel(b))
    }

    /// Whether all three channels are equal
    pub const fn is_monochrome(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f32_to_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
