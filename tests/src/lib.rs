/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use easyppm::{Color, ImageKind};
use serde::Deserialize;

mod netpbm;
mod roundtrip;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Bitmap,
    Greyscale,
    Color
}

impl JsonKind {
    pub fn to_kind(self) -> ImageKind {
        match self {
            Self::Bitmap => ImageKind::Bitmap,
            Self::Greyscale => ImageKind::Greyscale,
            Self::Color => ImageKind::Color
        }
    }
}

/// The error category a broken fixture must produce
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonError {
    Parse,
    Dimension
}

/// A pixel whose color is known
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Sample {
    pub x:   i64,
    pub y:   i64,
    pub rgb: [u8; 3]
}

impl Sample {
    pub fn color(&self) -> Color {
        Color::from(self.rgb)
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub kind:    Option<JsonKind>,
    pub width:   Option<usize>,
    pub height:  Option<usize>,
    #[serde(default)]
    pub samples: Vec<Sample>,
    pub error:   Option<JsonError>,
    pub comment: Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn netpbm_path() -> PathBuf {
    sample_path().join("test-images/netpbm")
}

/// A scratch file path unique to this process and `name`
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("easyppm-tests-{}-{name}", std::process::id()))
}
