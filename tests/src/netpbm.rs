/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::Path;

use easyppm::{DecoderOptions, ImageErrors, PixelBuffer};

use crate::{netpbm_path, JsonError, TestEntry};

fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("netpbm.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Check a decoded image against its entry, returning a description of the
/// first mismatch
fn check_image(image: &PixelBuffer, entry: &TestEntry) -> Result<(), String> {
    if let Some(kind) = entry.kind {
        if image.kind() != kind.to_kind() {
            return Err(format!("expected kind {:?} found {}", kind, image.kind()));
        }
    }
    if let (Some(width), Some(height)) = (entry.width, entry.height) {
        if image.dimensions() != (width, height) {
            return Err(format!(
                "expected {width}x{height} found {}x{}",
                image.width(),
                image.height()
            ));
        }
    }
    for sample in &entry.samples {
        let found = image
            .get(sample.x, sample.y)
            .map_err(|e| format!("reading {:?}: {e:?}", sample))?;

        if found != sample.color() {
            return Err(format!(
                "pixel ({}, {}) expected {} found {}",
                sample.x,
                sample.y,
                sample.color(),
                found
            ));
        }
    }
    Ok(())
}

fn check_error(err: &ImageErrors, expected: JsonError) -> Result<(), String> {
    let matched = match expected {
        JsonError::Parse => matches!(err, ImageErrors::ParseError(_)),
        JsonError::Dimension => matches!(err, ImageErrors::InvalidDimension(..))
    };
    if matched {
        Ok(())
    } else {
        Err(format!("expected a {expected:?} error found {err:?}"))
    }
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_netpbm() {
    let entries = load_entries();

    let default_path = netpbm_path();
    let mut files = Vec::new();

    for entry in &entries {
        let file_name = default_path.join(&entry.name);

        let result = match (PixelBuffer::open(&file_name), entry.error) {
            (Ok(image), None) => check_image(&image, entry),
            (Err(err), Some(expected)) => check_error(&err, expected),
            (Ok(_), Some(expected)) => Err(format!("expected a {:?} error", expected)),
            (Err(err), None) => Err(format!("unexpected error {:?}", err))
        };
        if let Err(msg) = result {
            eprintln!("{:?}: {}\nConfig:{:#?}\n", file_name, msg, entry);
            files.push(entry.to_owned());
        }
    }
    if !files.is_empty() {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn fixtures_survive_a_round_trip() {
    for entry in load_entries().iter().filter(|x| x.error.is_none()) {
        let image = PixelBuffer::open(netpbm_path().join(&entry.name)).unwrap();

        let text = image.encode_to_vec().unwrap();
        let decoded = PixelBuffer::decode(&text).unwrap();

        assert_eq!(decoded, image, "{}", entry.name);
    }
}

#[test]
fn fixture_extensions_match_their_kind() {
    for entry in load_entries() {
        if let Some(kind) = entry.kind {
            easyppm::validate_extension(&entry.name, kind.to_kind()).unwrap();
        }
    }
}

#[test]
fn strict_mode_accepts_clean_fixtures() {
    for entry in load_entries().iter().filter(|x| x.error.is_none()) {
        let data = read(netpbm_path().join(&entry.name)).unwrap();

        PixelBuffer::decode_with_options(&data, DecoderOptions::new_strict()).unwrap();
    }
}
