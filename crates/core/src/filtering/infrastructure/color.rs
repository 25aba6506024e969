//! 8-bit HSV conversion.
//!
//! Uses the convention where hue is halved into `[0, 180]` so the full
//! color wheel fits a byte; saturation and value span `[0, 255]`. The
//! conversion is pure and deterministic: the same pixel always classifies
//! the same way.

use crate::shared::frame::PixelFormat;

/// Converts one RGB pixel to HSV.
///
/// Achromatic pixels (all channels equal) have undefined hue; it is
/// reported as 0, matching the saturation-0 convention.
pub fn hsv_from_rgb(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let v = max;
    let s = if max == 0 {
        0
    } else {
        (delta * 255.0 / max as f32).round() as u8
    };

    if delta == 0.0 {
        return (0, s, v);
    }

    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let degrees = if max == r {
        60.0 * (gf - bf) / delta
    } else if max == g {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let degrees = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };

    ((degrees / 2.0).round() as u8, s, v)
}

/// Converts one BGR pixel to HSV.
pub fn hsv_from_bgr(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    hsv_from_rgb(r, g, b)
}

/// Converts one pixel in the given channel order.
pub fn hsv_from_pixel(format: PixelFormat, px: [u8; 3]) -> (u8, u8, u8) {
    match format {
        PixelFormat::Rgb8 => hsv_from_rgb(px[0], px[1], px[2]),
        PixelFormat::Bgr8 => hsv_from_bgr(px[0], px[1], px[2]),
    }
}
