/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

#![cfg_attr(not(test), no_std)]

pub mod fb;
pub mod image;

pub use bevy_math::UVec2;
pub use fb::Framebuffer;
pub use image::{
    Aligned, BYTES_PER_PIXEL, RawImage, RawImageError, SPLASH_HEIGHT, SPLASH_LEN, SPLASH_SIZE,
    SPLASH_WIDTH, argb, rgba,
};
