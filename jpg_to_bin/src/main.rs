/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use jpg_to_bin::{INPUT_PATH, OUTPUT_PATH, convert};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let img = convert(INPUT_PATH, OUTPUT_PATH)?;
    let (width, height) = img.dimensions();

    println!("Wrote {}x{} image data to {}", width, height, OUTPUT_PATH);
    Ok(())
}
