/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::fmt;

use bevy_math::UVec2;

pub const SPLASH_WIDTH: u32 = 500;
pub const SPLASH_HEIGHT: u32 = 500;
pub const SPLASH_SIZE: UVec2 = UVec2::new(SPLASH_WIDTH, SPLASH_HEIGHT);

pub const BYTES_PER_PIXEL: usize = 4;
pub const SPLASH_LEN: usize = SPLASH_WIDTH as usize * SPLASH_HEIGHT as usize * BYTES_PER_PIXEL;

/// Forces 4-byte alignment on embedded data, e.g.
/// `static SPLASH: &Aligned<[u8]> = &Aligned(*include_bytes!("image.bin"));`
#[repr(C, align(4))]
pub struct Aligned<B: ?Sized>(pub B);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawImageError {
    Length { expected: usize, actual: usize },
    Misaligned,
}

impl fmt::Display for RawImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawImageError::Length { expected, actual } => {
                write!(f, "raw image is {actual} bytes, expected {expected}")
            }
            RawImageError::Misaligned => write!(f, "raw image data is not 4-byte aligned"),
        }
    }
}

impl core::error::Error for RawImageError {}

/// A headerless BGRA blob viewed as pixel words.
///
/// Every word is stored little-endian and reads as `0xAARRGGBB`, which is
/// the layout UEFI GOP framebuffers expect for `PixelBlueGreenRedReserved8BitPerColor`.
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    size: UVec2,
    data: &'a [u32],
}

impl<'a> RawImage<'a> {
    pub fn from_bytes(bytes: &'a [u8], size: UVec2) -> Result<Self, RawImageError> {
        let expected = size.x as usize * size.y as usize * BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return Err(RawImageError::Length {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytemuck::try_cast_slice(bytes).map_err(|_| RawImageError::Misaligned)?;
        Ok(Self { size, data })
    }

    pub fn from_words(data: &'a [u32], size: UVec2) -> Result<Self, RawImageError> {
        let expected = size.x as usize * size.y as usize;
        if data.len() != expected {
            return Err(RawImageError::Length {
                expected: expected * BYTES_PER_PIXEL,
                actual: data.len() * BYTES_PER_PIXEL,
            });
        }

        Ok(Self { size, data })
    }

    pub fn splash(bytes: &'a [u8]) -> Result<Self, RawImageError> {
        Self::from_bytes(bytes, SPLASH_SIZE)
    }

    pub fn pixel(&self, pos: UVec2) -> Option<u32> {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }

        Some(u32::from_le(self.data[(pos.y * self.size.x + pos.x) as usize]))
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Raw words, `size.x * size.y` of them.
    pub fn data(&self) -> &'a [u32] {
        self.data
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }
}

pub const fn argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

pub const fn rgba(color: u32) -> [u8; 4] {
    let [b, g, r, a] = color.to_le_bytes();
    [r, g, b, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_matches_bgra_bytes() {
        let color = argb(0x11, 0x22, 0x33, 0x44);
        assert_eq!(color, 0x4411_2233);
        assert_eq!(color.to_le_bytes(), [0x33, 0x22, 0x11, 0x44]);
        assert_eq!(rgba(color), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_splash_len() {
        assert_eq!(SPLASH_LEN, 1_000_000);
    }

    #[test]
    fn test_from_bytes_reads_bgra_words() {
        // Two pixels: pure red and pure blue, stored as B, G, R, A.
        let blob = Aligned([0_u8, 0, 255, 255, 255, 0, 0, 128]);
        let image = RawImage::from_bytes(&blob.0, UVec2::new(2, 1)).unwrap();

        assert_eq!(image.pixel(UVec2::new(0, 0)), Some(0xFFFF_0000));
        assert_eq!(image.pixel(UVec2::new(1, 0)), Some(0x8000_00FF));
        assert_eq!(image.pixel(UVec2::new(2, 0)), None);
        assert_eq!(image.pixel(UVec2::new(0, 1)), None);
        assert_eq!(image.as_bytes(), &blob.0);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        let blob = Aligned([0_u8; 12]);
        let err = RawImage::from_bytes(&blob.0, UVec2::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            RawImageError::Length {
                expected: 16,
                actual: 12
            }
        );
        assert_eq!(err.to_string(), "raw image is 12 bytes, expected 16");

        let err = RawImage::splash(&blob.0).unwrap_err();
        assert_eq!(
            err,
            RawImageError::Length {
                expected: SPLASH_LEN,
                actual: 12
            }
        );
    }

    #[test]
    fn test_from_bytes_rejects_misaligned() {
        let blob = Aligned([0_u8; 20]);
        let err = RawImage::from_bytes(&blob.0[1..17], UVec2::new(2, 2)).unwrap_err();
        assert_eq!(err, RawImageError::Misaligned);
    }

    #[test]
    fn test_from_words() {
        let words = [argb(1, 2, 3, 4).to_le(); 6];
        let image = RawImage::from_words(&words, UVec2::new(3, 2)).unwrap();
        assert_eq!(image.pixel(UVec2::new(2, 1)), Some(argb(1, 2, 3, 4)));

        assert!(RawImage::from_words(&words, UVec2::new(2, 2)).is_err());
    }

    #[test]
    fn test_accessors_match_checked_geometry() {
        let words = [0_u32; 6];
        let image = RawImage::from_words(&words, UVec2::new(2, 3)).unwrap();
        assert_eq!(image.size(), UVec2::new(2, 3));
        assert_eq!(image.data().len(), 6);
        assert_eq!(image.pixel(UVec2::new(1, 2)), Some(0));
        assert_eq!(image.pixel(UVec2::new(2, 2)), None);
    }

    #[test]
    fn test_aligned_unsized() {
        static BLOB: &Aligned<[u8]> = &Aligned([7_u8, 8, 9, 10]);
        let image = RawImage::from_bytes(&BLOB.0, UVec2::ONE).unwrap();
        assert_eq!(image.pixel(UVec2::ZERO), Some(0x0A09_0807));
    }
}
