/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use bevy_math::UVec2;

use crate::image::RawImage;

/// A linear 32bpp framebuffer. `pitch` is in pixels per scanline.
#[derive(Debug)]
pub struct Framebuffer<'a> {
    buffer: &'a mut [u32],
    size: UVec2,
    pitch: u32,
}

impl<'a> Framebuffer<'a> {
    pub fn new(buffer: &'a mut [u32], size: UVec2, pitch: u32) -> Option<Self> {
        if pitch < size.x || buffer.len() < pitch as usize * size.y as usize {
            return None;
        }

        Some(Framebuffer {
            buffer,
            size,
            pitch,
        })
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    pub fn draw_pixel(&mut self, pos: UVec2, color: u32) {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return;
        }

        self.buffer[(pos.y * self.pitch + pos.x) as usize] = color.to_le();
    }

    pub fn pixel(&self, pos: UVec2) -> Option<u32> {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }

        Some(u32::from_le(self.buffer[(pos.y * self.pitch + pos.x) as usize]))
    }

    pub fn clear(&mut self, color: u32) {
        for y in 0..self.size.y {
            let start = (y * self.pitch) as usize;
            self.buffer[start..start + self.size.x as usize].fill(color.to_le());
        }
    }

    pub fn draw_image(&mut self, pos: UVec2, image: &RawImage) {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return;
        }

        // both sides hold little-endian words, so rows copy verbatim
        let size = image.size();
        let data = image.data();
        let visible = (self.size - pos).min(size);
        for sy in 0..visible.y {
            let src_start = (sy * size.x) as usize;
            let dst_start = ((pos.y + sy) * self.pitch + pos.x) as usize;
            self.buffer[dst_start..dst_start + visible.x as usize]
                .copy_from_slice(&data[src_start..src_start + visible.x as usize]);
        }
    }

    pub fn centered(&self, size: UVec2) -> UVec2 {
        self.size.saturating_sub(size) / 2
    }

    pub fn draw_image_centered(&mut self, image: &RawImage) {
        let pos = self.centered(image.size());
        self.draw_image(pos, image);
    }
}
