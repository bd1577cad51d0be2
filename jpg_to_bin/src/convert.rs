/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use image::{ImageReader, RgbaImage, imageops::FilterType};
use splash::{SPLASH_HEIGHT, SPLASH_LEN, SPLASH_WIDTH};

pub const INPUT_PATH: &str = "wakamo1.jpg";
pub const OUTPUT_PATH: &str = "image.bin";

/// Bicubic (Catmull-Rom).
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Decodes any format the `image` crate knows into RGBA8.
/// Sources without alpha come out fully opaque.
pub fn load_image(path: impl AsRef<Path>) -> anyhow::Result<RgbaImage> {
    let path = path.as_ref();

    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?
        .to_rgba8();

    log::info!(
        "Decoded {}x{} image from {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(img)
}

/// Stretches to the splash resolution, aspect ratio is not kept.
pub fn resize(img: &RgbaImage) -> RgbaImage {
    log::debug!(
        "Resizing {}x{} to {}x{} with {:?}",
        img.width(),
        img.height(),
        SPLASH_WIDTH,
        SPLASH_HEIGHT,
        RESIZE_FILTER
    );
    image::imageops::resize(img, SPLASH_WIDTH, SPLASH_HEIGHT, RESIZE_FILTER)
}

/// RGBA -> BGRA, in place.
pub fn swap_red_blue(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        px.0.swap(0, 2);
    }
}

pub fn write_raw(img: &RgbaImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(img.as_raw())
        .with_context(|| format!("Failed to write pixel data to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    log::info!("Wrote {} bytes to {}", img.as_raw().len(), path.display());
    Ok(())
}

/// Runs the whole pipeline and returns the BGRA grid that was written.
///
/// The input is fully decoded before `output` is touched, so a bad input
/// leaves any existing output file as it was.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> anyhow::Result<RgbaImage> {
    let img = load_image(input)?;

    let mut img = resize(&img);
    debug_assert_eq!(img.as_raw().len(), SPLASH_LEN);

    log::debug!("Swapping red and blue channels");
    swap_red_blue(&mut img);

    write_raw(&img, output)?;
    Ok(img)
}
