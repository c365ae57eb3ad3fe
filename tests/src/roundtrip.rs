/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Randomized checks over whole pixel buffers
use easyppm::easyppm_core::kind::ALL_KINDS;
use easyppm::{Color, ImageKind, Origin, PixelBuffer};
use nanorand::{Rng, WyRand};

use crate::scratch_path;

fn random_image(rng: &mut WyRand, kind: ImageKind) -> PixelBuffer {
    let width = i64::from(rng.generate_range(1_u8..=40));
    let height = i64::from(rng.generate_range(1_u8..=12));

    let mut image = PixelBuffer::new(width, height, kind).unwrap();

    for y in 0..height {
        for x in 0..width {
            let color = match kind {
                ImageKind::Bitmap => Color::grey(rng.generate_range(0_u8..=1)),
                ImageKind::Greyscale => Color::grey(rng.generate()),
                ImageKind::Color => Color::rgb(rng.generate(), rng.generate(), rng.generate())
            };
            image.set(x, y, color).unwrap();
        }
    }
    image
}

#[test]
fn save_then_open_every_kind() {
    let mut rng = WyRand::new_seed(42);

    for kind in ALL_KINDS {
        let path = scratch_path(&format!("roundtrip.{}", kind.extension()));

        for _ in 0..10 {
            let image = random_image(&mut rng, kind);
            image.save_checked(&path).unwrap();

            assert_eq!(PixelBuffer::open(&path).unwrap(), image);
        }
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn encoded_lines_stay_short() {
    let mut rng = WyRand::new_seed(7);

    for kind in ALL_KINDS {
        let image = random_image(&mut rng, kind);
        let text = String::from_utf8(image.encode_to_vec().unwrap()).unwrap();

        assert!(text.lines().all(|line| line.len() <= 70));
    }
}

#[test]
fn double_flip_is_identity() {
    let mut rng = WyRand::new_seed(0xdead);

    for kind in ALL_KINDS {
        let image = random_image(&mut rng, kind);
        let mut flipped = image.clone();

        flipped.invert_y();
        flipped.invert_y();

        assert_eq!(flipped, image);
    }
}

#[test]
fn flip_matches_lower_left_addressing() {
    let mut rng = WyRand::new_seed(99);
    let image = random_image(&mut rng, ImageKind::Color);

    let mut flipped = image.clone();
    flipped.invert_y();

    let lower = image.clone().with_origin(Origin::LowerLeft);
    let (width, height) = image.dimensions();

    for y in 0..height as i64 {
        for x in 0..width as i64 {
            assert_eq!(flipped.get(x, y).unwrap(), lower.get(x, y).unwrap());
        }
    }
}

#[test]
fn unit_gamma_changes_nothing() {
    let mut rng = WyRand::new_seed(3);

    for kind in ALL_KINDS {
        let image = random_image(&mut rng, kind);
        let mut corrected = image.clone();

        corrected.gamma_correct(1.0).unwrap();

        assert_eq!(corrected, image);
    }
}

#[test]
fn metadata_serializes_to_json() {
    let image = PixelBuffer::new_with_origin(2, 1, ImageKind::Color, Origin::LowerLeft).unwrap();

    let json = serde_json::to_string(&image.metadata()).unwrap();

    assert_eq!(
        json,
        r#"{"width":2,"height":1,"kind":"Color","origin":"LowerLeft"}"#
    );
}
