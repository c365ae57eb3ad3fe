/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write as _;
use std::io::Write;

use easyppm_core::kind::ImageKind;
use easyppm_core::log::trace;
use easyppm_core::options::EncoderOptions;

use crate::errors::PnmEncodeErrors;

/// A plain text netpbm encoder
///
/// Pixel data is laid out one image row per line, rows wider than the
/// configured line width are wrapped between pixels.
pub struct PnmEncoder<'a, W: Write> {
    writer:  &'a mut W,
    options: EncoderOptions
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        PnmEncoder::new_with_options(EncoderOptions::default(), writer)
    }

    /// Create a new encoder with the specified options
    pub fn new_with_options(options: EncoderOptions, writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer, options }
    }

    fn write_headers(
        &mut self, kind: ImageKind, width: usize, height: usize
    ) -> Result<(), PnmEncodeErrors> {
        let header = if kind.has_max_value() {
            format!("{}\n{width} {height} 255\n", kind.magic())
        } else {
            format!("{}\n{width} {height}\n", kind.magic())
        };
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `data` as a plain text netpbm image
    ///
    /// `data` holds `width * height * kind.num_components()` bytes in row-major
    /// order. Bitmap bytes are `0` for black, anything else for white.
    ///
    /// # Example
    /// ```
    /// use easyppm_pnm::easyppm_core::kind::ImageKind;
    /// use easyppm_pnm::PnmEncoder;
    ///
    /// let mut output = Vec::new();
    /// PnmEncoder::new(&mut output)
    ///     .encode(2, 1, ImageKind::Bitmap, &[0, 1])
    ///     .unwrap();
    ///
    /// assert_eq!(output, b"P1\n2 1\n1 0\n");
    /// ```
    pub fn encode(
        &mut self, width: usize, height: usize, kind: ImageKind, data: &[u8]
    ) -> Result<(), PnmEncodeErrors> {
        if width == 0 || height == 0 {
            return Err(PnmEncodeErrors::Static("Image dimensions cannot be zero"));
        }
        let components = kind.num_components();

        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(components))
            .ok_or(PnmEncodeErrors::Static("Image dimensions overflow"))?;

        if expected != data.len() {
            return Err(PnmEncodeErrors::Static(
                "Data length does not match image dimensions"
            ));
        }
        self.write_headers(kind, width, height)?;

        let max_line = self.options.get_max_line_width();
        let mut line = String::with_capacity(max_line + 16);
        let mut group = String::with_capacity(12);

        for row in data.chunks_exact(width * components) {
            for pixel in row.chunks_exact(components) {
                group.clear();
                format_pixel(&mut group, kind, pixel);

                if !line.is_empty() && line.len() + 1 + group.len() > max_line {
                    line.push('\n');
                    self.writer.write_all(line.as_bytes())?;
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&group);
            }
            line.push('\n');
            self.writer.write_all(line.as_bytes())?;
            line.clear();
        }
        self.writer.flush()?;

        trace!("Wrote {} {} pixels", width * height, kind);

        Ok(())
    }
}

fn format_pixel(out: &mut String, kind: ImageKind, pixel: &[u8]) {
    // writing to a String cannot fail
    let _ = match kind {
        // one is ink, i.e black
        ImageKind::Bitmap => write!(out, "{}", u8::from(pixel[0] == 0)),
        ImageKind::Greyscale => write!(out, "{}", pixel[0]),
        ImageKind::Color => write!(out, "{} {} {}", pixel[0], pixel[1], pixel[2])
    };
}
