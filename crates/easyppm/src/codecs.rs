/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing pixel buffers as plain text netpbm
//!
//! Buffers are decoded from in-memory bytes or files and encoded to any
//! [`Write`] sink or file. File variants open and close the file themselves.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use easyppm_core::log::{info, trace};
use easyppm_core::options::{DecoderOptions, EncoderOptions};
use easyppm_pnm::{PnmDecodeErrors, PnmDecoder, PnmEncoder};

use crate::errors::ImageErrors;
use crate::image::PixelBuffer;
use crate::path::validate_extension;

// decoding
impl PixelBuffer {
    /// Decode a plain text netpbm image held in memory
    ///
    /// # Example
    /// ```
    /// use easyppm::{Color, ImageKind, PixelBuffer};
    ///
    /// let image = PixelBuffer::decode(b"P3\n1 1 255\n255 128 0\n").unwrap();
    ///
    /// assert_eq!(image.kind(), ImageKind::Color);
    /// assert_eq!(image.get(0, 0).unwrap(), Color::rgb(255, 128, 0));
    /// ```
    pub fn decode(data: &[u8]) -> Result<PixelBuffer, ImageErrors> {
        PixelBuffer::decode_with_options(data, DecoderOptions::default())
    }

    /// Decode a plain text netpbm image held in memory with custom options
    pub fn decode_with_options(
        data: &[u8], options: DecoderOptions
    ) -> Result<PixelBuffer, ImageErrors> {
        let mut decoder = PnmDecoder::new_with_options(options, data);

        let pixels = decoder.decode()?;

        let (width, height) = decoder
            .get_dimensions()
            .ok_or(PnmDecodeErrors::GenericStatic("Headers were not decoded"))?;
        let kind = decoder
            .get_kind()
            .ok_or(PnmDecodeErrors::GenericStatic("Headers were not decoded"))?;

        Ok(PixelBuffer::from_raw(width, height, kind, pixels))
    }

    /// Read and decode the file at `path`
    ///
    /// The extension is not inspected, the kind comes from the file contents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, ImageErrors> {
        PixelBuffer::open_with_options(path, DecoderOptions::default())
    }

    /// Read and decode the file at `path` with custom options
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<PixelBuffer, ImageErrors> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        trace!("Read {} bytes from {:?}", data.len(), path);

        let image = PixelBuffer::decode_with_options(&data, options)?;

        info!(
            "Opened {:?}: {}x{} {}",
            path,
            image.width(),
            image.height(),
            image.kind()
        );
        Ok(image)
    }

    /// Replace this buffer with the image decoded from `path`
    ///
    /// The buffer takes the dimensions and kind of the file and keeps its
    /// origin. On failure the buffer is left exactly as it was.
    pub fn read<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ImageErrors> {
        let origin = self.origin();
        let image = PixelBuffer::open(path)?;

        *self = image.with_origin(origin);

        Ok(())
    }
}

// encoding
impl PixelBuffer {
    /// Encode this buffer as plain text netpbm into `sink`
    ///
    /// The tag follows the buffer kind, `P1`, `P2` or `P3`, and rows are
    /// written top to bottom as stored
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<(), ImageErrors> {
        self.encode_with_options(sink, EncoderOptions::default())
    }

    /// Encode this buffer into `sink` with custom options
    pub fn encode_with_options<W: Write>(
        &self, sink: &mut W, options: EncoderOptions
    ) -> Result<(), ImageErrors> {
        PnmEncoder::new_with_options(options, sink).encode(
            self.width(),
            self.height(),
            self.kind(),
            self.data()
        )?;
        Ok(())
    }

    /// Encode this buffer and return the text as bytes
    ///
    /// # Example
    /// ```
    /// use easyppm::{Color, ImageKind, PixelBuffer};
    ///
    /// let mut image = PixelBuffer::new(2, 1, ImageKind::Greyscale).unwrap();
    /// image.set(1, 0, Color::grey(200)).unwrap();
    ///
    /// assert_eq!(image.encode_to_vec().unwrap(), b"P2\n2 1 255\n0 200\n");
    /// ```
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, ImageErrors> {
        let mut output = Vec::new();
        self.encode(&mut output)?;
        Ok(output)
    }

    /// Encode this buffer to the file at `path`, creating or truncating it
    ///
    /// The extension is not inspected, see [`save_checked`](Self::save_checked)
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        self.encode(&mut writer)?;

        info!("Saved {} image to {:?}", self.kind(), path);

        Ok(())
    }

    /// Check that the extension of `path` matches the buffer kind, then save
    ///
    /// Nothing is written when the check fails
    pub fn save_checked<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        validate_extension(path.as_ref(), self.kind())?;
        self.save(path)
    }
}
