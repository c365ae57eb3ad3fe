/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! File name checks, separate from the codec itself
use std::path::Path;

use easyppm_core::kind::ImageKind;

use crate::errors::ImageErrors;

/// Check that the extension of `path` matches the conventional one for `kind`
///
/// The extension is whatever follows the last `.` of the file name and is
/// compared case-insensitively against `pbm`, `pgm` or `ppm`.
///
/// # Errors
/// - `MalformedPath` if the file name has no `.`
/// - `ExtensionMismatch` if the extension belongs to another kind or none at all
///
/// # Example
/// ```
/// use easyppm::{validate_extension, ImageKind};
///
/// assert!(validate_extension("out/picture.PPM", ImageKind::Color).is_ok());
/// assert!(validate_extension("picture.pgm", ImageKind::Color).is_err());
/// assert!(validate_extension("picture", ImageKind::Color).is_err());
/// ```
pub fn validate_extension<P: AsRef<Path>>(path: P, kind: ImageKind) -> Result<(), ImageErrors> {
    let path = path.as_ref();

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .ok_or_else(|| ImageErrors::MalformedPath(path.to_path_buf()))?;

    let (_, extension) = file_name
        .rsplit_once('.')
        .ok_or_else(|| ImageErrors::MalformedPath(path.to_path_buf()))?;

    if ImageKind::from_extension(extension) == Some(kind) {
        Ok(())
    } else {
        Err(ImageErrors::ExtensionMismatch {
            path:     path.to_path_buf(),
            expected: kind
        })
    }
}
