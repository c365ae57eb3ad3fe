/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use easyppm_core::bytestream::TokenReader;
use easyppm_core::kind::ImageKind;
use easyppm_core::log::{info, trace, warn};
use easyppm_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;

/// An instance of a plain text netpbm decoder
///
/// The decoder can decode P1, P2 and P3 formats
pub struct PnmDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       u64,
    decoded_headers: bool,
    reader:          TokenReader<'a>,
    kind:            ImageKind,
    options:         DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded pixels
    ///
    /// # Example
    /// ```
    /// use easyppm_pnm::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: netpbm encoded data.
    ///
    /// # Example
    /// ```
    /// use easyppm_pnm::easyppm_core::options::DecoderOptions;
    /// use easyppm_pnm::PnmDecoder;
    /// let options = DecoderOptions::new_strict();
    /// let mut decoder = PnmDecoder::new_with_options(options, b"P1 1 1 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder {
            width: 0,
            height: 0,
            max_value: 1,
            decoded_headers: false,
            reader: TokenReader::new(data),
            kind: ImageKind::Bitmap,
            options
        }
    }

    /// Read the tag, dimensions and max value and store them in internal state
    ///
    /// Calling this more than once is a no-op after the first success
    pub fn read_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        self.kind = self.read_tag()?;

        info!("Kind: {:?}", self.kind);

        let width = self.get_signed("width")?;
        let height = self.get_signed("height")?;

        if self.kind.has_max_value() {
            let max_value = self.get_signed("max value")?;

            if !(1..=255).contains(&max_value) {
                let msg = format!("Max value {max_value} outside the supported range 1..=255");
                return Err(PnmDecodeErrors::InvalidHeader(msg));
            }
            self.max_value = max_value.unsigned_abs();
        } else {
            self.max_value = 1;
        }

        if width <= 0 || height <= 0 {
            return Err(PnmDecodeErrors::InvalidDimensions(width, height));
        }
        // positive i64 always fits in u64, clamp to usize for 32 bit targets
        let width = usize::try_from(width).unwrap_or(usize::MAX);
        let height = usize::try_from(height).unwrap_or(usize::MAX);

        if width > self.options.get_max_width() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        self.width = width;
        self.height = height;

        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    fn read_tag(&mut self) -> Result<ImageKind, PnmDecodeErrors> {
        let token = self
            .reader
            .next_token()
            .ok_or(PnmDecodeErrors::GenericStatic("Empty stream, no netpbm tag"))?;

        match token {
            [b'P', version] => {
                if let Some(kind) = ImageKind::from_magic(*version) {
                    Ok(kind)
                } else if (b'4'..=b'7').contains(version) {
                    Err(PnmDecodeErrors::UnsupportedBinary(*version))
                } else {
                    Err(PnmDecodeErrors::UnknownTag(
                        String::from_utf8_lossy(token).into_owned()
                    ))
                }
            }
            _ => Err(PnmDecodeErrors::UnknownTag(
                String::from_utf8_lossy(token).into_owned()
            ))
        }
    }

    /// Read a header integer which may carry a sign
    fn get_signed(&mut self, field: &'static str) -> Result<i64, PnmDecodeErrors> {
        let token = self.reader.next_token().ok_or_else(|| {
            PnmDecodeErrors::InvalidHeader(format!("Stream ended before the {field}"))
        })?;

        let (negative, digits) = match token {
            [b'-', rest @ ..] => (true, rest),
            [b'+', rest @ ..] => (false, rest),
            _ => (false, token)
        };
        let value = parse_decimal(digits)
            .and_then(|v| i64::try_from(v).ok())
            .ok_or_else(|| invalid_token(token))?;

        Ok(if negative { -value } else { value })
    }

    /// Return the image kind or none if headers
    /// aren't decoded
    pub const fn get_kind(&self) -> Option<ImageKind> {
        if self.decoded_headers {
            Some(self.kind)
        } else {
            None
        }
    }

    /// Return image dimensions as `(width, height)` or none if
    /// headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the max value declared in the header, or none
    /// if headers aren't decoded
    ///
    /// Bitmaps report 1
    pub const fn get_max_value(&self) -> Option<u64> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Return the number of bytes needed to hold the decoded image
    /// or none if headers aren't decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(self.kind.num_components())
        } else {
            None
        }
    }

    /// Decode a netpbm encoded file and return the pixel bytes
    ///
    /// Bitmaps produce one byte per pixel with `0` for black and `1` for white,
    /// greyscale one byte per pixel and color three bytes per pixel.
    /// Samples are scaled to `0..=255` when the declared max value differs.
    pub fn decode(&mut self) -> Result<Vec<u8>, PnmDecodeErrors> {
        self.read_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(PnmDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let mut data = vec![0_u8; size];

        self.decode_into(&mut data)?;

        Ok(data)
    }

    /// Decode pixels into a caller provided buffer
    ///
    /// The buffer must be exactly [`output_buffer_size`](Self::output_buffer_size) bytes
    pub fn decode_into(&mut self, out: &mut [u8]) -> Result<(), PnmDecodeErrors> {
        self.read_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(PnmDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        if out.len() != size {
            return Err(PnmDecodeErrors::GenericStatic(
                "Output buffer size does not match image dimensions"
            ));
        }

        match self.kind {
            ImageKind::Bitmap => self.decode_bits(out)?,
            ImageKind::Greyscale | ImageKind::Color => self.decode_samples(out)?
        }

        self.reader.skip_spaces();

        if !self.reader.eof() {
            if self.options.get_strict_mode() {
                return Err(PnmDecodeErrors::TrailingData(self.reader.get_position()));
            }
            warn!(
                "Ignoring {} bytes after the last pixel",
                self.reader.remaining()
            );
        }

        Ok(())
    }

    /// Bitmap pixels are single digits, whitespace between them is optional
    fn decode_bits(&mut self, out: &mut [u8]) -> Result<(), PnmDecodeErrors> {
        let expected = out.len();

        for (found, pixel) in out.iter_mut().enumerate() {
            self.reader.skip_spaces();

            *pixel = match self.reader.get_u8() {
                // one is ink, i.e black
                Some(b'1') => 0,
                Some(b'0') => 1,
                Some(digit @ b'2'..=b'9') => {
                    return Err(PnmDecodeErrors::ValueOutOfRange(
                        u64::from(digit - b'0'),
                        1
                    ));
                }
                Some(byte) => {
                    return Err(invalid_token(&[byte]));
                }
                None => return Err(PnmDecodeErrors::TruncatedData(expected, found))
            };
        }
        trace!("Read {} bitmap pixels", expected);

        Ok(())
    }

    fn decode_samples(&mut self, out: &mut [u8]) -> Result<(), PnmDecodeErrors> {
        let components = self.kind.num_components();
        let expected = out.len() / components;
        let max_value = self.max_value;

        for (position, sample) in out.iter_mut().enumerate() {
            let token = self
                .reader
                .next_token()
                .ok_or(PnmDecodeErrors::TruncatedData(expected, position / components))?;

            let value = parse_decimal(token).ok_or_else(|| invalid_token(token))?;

            if value > max_value {
                return Err(PnmDecodeErrors::ValueOutOfRange(value, max_value));
            }
            *sample = scale_sample(value, max_value);
        }
        trace!("Read {} samples for {} pixels", out.len(), expected);

        Ok(())
    }
}

/// Rescale `value` in `0..=max_value` to `0..=255`, rounding to nearest
#[allow(clippy::cast_possible_truncation)]
fn scale_sample(value: u64, max_value: u64) -> u8 {
    if max_value == 255 {
        return value as u8;
    }
    ((value * 255 + max_value / 2) / max_value) as u8
}

/// Parse an unsigned decimal, `None` for empty input, non-digits or overflow
fn parse_decimal(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0_u64, |acc, byte| {
        if byte.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
        } else {
            None
        }
    })
}

fn invalid_token(token: &[u8]) -> PnmDecodeErrors {
    PnmDecodeErrors::InvalidToken(String::from_utf8_lossy(token).into_owned())
}

#[cfg(test)]
mod tests {
    use easyppm_core::kind::ImageKind;
    use easyppm_core::options::DecoderOptions;

    use crate::decoder::{parse_decimal, scale_sample};
    use crate::errors::PnmDecodeErrors;
    use crate::PnmDecoder;

    #[test]
    fn decode_greyscale() {
        let mut decoder = PnmDecoder::new(b"P2\n3 2\n255\n0 1 2\n253 254 255\n");
        let pixels = decoder.decode().unwrap();

        assert_eq!(pixels, [0, 1, 2, 253, 254, 255]);
        assert_eq!(decoder.get_dimensions(), Some((3, 2)));
        assert_eq!(decoder.get_kind(), Some(ImageKind::Greyscale));
        assert_eq!(decoder.get_max_value(), Some(255));
    }

    #[test]
    fn decode_color_with_comments() {
        let data = b"P3\n# made by hand\n2 1 # dims\n255\n255 0 0 # red\n0 0 255\n";
        let pixels = PnmDecoder::new(data).decode().unwrap();

        assert_eq!(pixels, [255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn bitmap_tokens_are_inverted() {
        let pixels = PnmDecoder::new(b"P1\n4 1\n1 0 1 0").decode().unwrap();
        assert_eq!(pixels, [0, 1, 0, 1]);
    }

    #[test]
    fn bitmap_digits_need_no_separator() {
        let pixels = PnmDecoder::new(b"P1\n3 2\n100\n011\n").decode().unwrap();
        assert_eq!(pixels, [0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn bitmap_rejects_digits_above_one() {
        let err = PnmDecoder::new(b"P1 2 1 0 2").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::ValueOutOfRange(2, 1)));
    }

    #[test]
    fn truncated_data_reports_counts() {
        let err = PnmDecoder::new(b"P3 2 2 255 1 2 3 4 5 6 7")
            .decode()
            .unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::TruncatedData(4, 2)));

        let err = PnmDecoder::new(b"P1 2 2 0 1 1").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::TruncatedData(4, 3)));
    }

    #[test]
    fn non_positive_dimensions() {
        let err = PnmDecoder::new(b"P2 0 4 255").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidDimensions(0, 4)));

        let err = PnmDecoder::new(b"P1 3 -1").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidDimensions(3, -1)));
    }

    #[test]
    fn binary_variants_are_rejected() {
        let err = PnmDecoder::new(b"P6\n1 1\n255\n\x00\x00\x00")
            .decode()
            .unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::UnsupportedBinary(b'6')));
    }

    #[test]
    fn unknown_tags() {
        assert!(matches!(
            PnmDecoder::new(b"P9 1 1").decode(),
            Err(PnmDecodeErrors::UnknownTag(_))
        ));
        assert!(matches!(
            PnmDecoder::new(b"GIF89a").decode(),
            Err(PnmDecodeErrors::UnknownTag(_))
        ));
        assert!(matches!(
            PnmDecoder::new(b"").decode(),
            Err(PnmDecodeErrors::GenericStatic(_))
        ));
    }

    #[test]
    fn invalid_tokens() {
        let err = PnmDecoder::new(b"P2 1 1 255 12a").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidToken(ref t) if t == "12a"));

        let err = PnmDecoder::new(b"P2 x 1 255 0").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidToken(_)));
    }

    #[test]
    fn sample_above_max_value() {
        let err = PnmDecoder::new(b"P2 1 1 255 256").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::ValueOutOfRange(256, 255)));

        let err = PnmDecoder::new(b"P2 1 1 15 16").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::ValueOutOfRange(16, 15)));
    }

    #[test]
    fn sixteen_bit_max_value_is_rejected() {
        let err = PnmDecoder::new(b"P2 1 1 65535 0").decode().unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn small_max_values_are_scaled() {
        let pixels = PnmDecoder::new(b"P2 3 1 15 0 7 15").decode().unwrap();
        assert_eq!(pixels, [0, 119, 255]);
    }

    #[test]
    fn large_dimensions() {
        let options = DecoderOptions::default().set_max_width(10);
        let err = PnmDecoder::new_with_options(options, b"P2 11 1 255")
            .decode()
            .unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::LargeDimensions(10, 11)));
    }

    #[test]
    fn trailing_data_depends_on_strict_mode() {
        let data = b"P2 1 1 255 7 8";
        assert_eq!(PnmDecoder::new(data).decode().unwrap(), [7]);

        let options = DecoderOptions::new_strict();
        let err = PnmDecoder::new_with_options(options, data)
            .decode()
            .unwrap_err();
        assert!(matches!(err, PnmDecodeErrors::TrailingData(13)));

        // trailing whitespace and comments are fine
        let data = b"P2 1 1 255 7\n# end\n";
        assert!(PnmDecoder::new_with_options(options, data).decode().is_ok());
    }

    #[test]
    fn headers_are_none_before_decoding() {
        let decoder = PnmDecoder::new(b"P3 1 1 255 0 0 0");
        assert_eq!(decoder.get_dimensions(), None);
        assert_eq!(decoder.get_kind(), None);
        assert_eq!(decoder.output_buffer_size(), None);
    }

    #[test]
    fn decimal_parsing() {
        assert_eq!(parse_decimal(b"0042"), Some(42));
        assert_eq!(parse_decimal(b""), None);
        assert_eq!(parse_decimal(b"-1"), None);
        assert_eq!(parse_decimal(b"99999999999999999999999"), None);
        assert_eq!(scale_sample(1, 1), 255);
        assert_eq!(scale_sample(200, 255), 200);
    }
}
