// src/gui/icon.rs
use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;
const ORANGE: Rgba<u8> = Rgba([0xE8, 0x74, 0x2A, 0xFF]);
const SEAM: Rgba<u8> = Rgba([0x2B, 0x1A, 0x10, 0xFF]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Window icon: a basketball, rasterized at start-up so no asset file is needed.
pub fn app_icon() -> IconData {
    let img = basketball(SIZE);
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn basketball(size: u32) -> RgbaImage {
    let c = (size as f32 - 1.0) / 2.0;
    let r = c - 1.0;
    let seam = size as f32 / 32.0;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let d = (dx * dx + dy * dy).sqrt();
        if d > r {
            return CLEAR;
        }
        // Outline, the two straight seams, and the two curved side seams
        let side = |ox: f32| ((dx - ox).powi(2) + dy * dy).sqrt() - r;
        let on_seam = r - d < seam
            || dx.abs() < seam
            || dy.abs() < seam
            || side(1.45 * r).abs() < seam
            || side(-1.45 * r).abs() < seam;
        if on_seam { SEAM } else { ORANGE }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_round_and_opaque_in_the_middle() {
        let icon = app_icon();
        assert_eq!((icon.width, icon.height), (SIZE, SIZE));
        assert_eq!(icon.rgba.len(), (SIZE * SIZE * 4) as usize);

        let img = basketball(SIZE);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
        assert_eq!(*img.get_pixel(24, 22), ORANGE);
    }
}
