//! Synthetic frame builders for tests.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};

/// All-black grayscale frame
pub fn blank_frame(width: u32, height: u32) -> GrayImage {
    GrayImage::new(width, height)
}

/// Paint an axis-aligned rectangle, clipped to the frame
pub fn fill_rect(frame: &mut GrayImage, x0: u32, y0: u32, width: u32, height: u32, value: u8) {
    let x_max = (x0 + width).min(frame.width());
    let y_max = (y0 + height).min(frame.height());
    for y in y0..y_max {
        for x in x0..x_max {
            frame.put_pixel(x, y, Luma([value]));
        }
    }
}

/// Paint a filled disc of the given radius, clipped to the frame
pub fn fill_disc(frame: &mut GrayImage, cx: i64, cy: i64, radius: i64, value: u8) {
    let (w, h) = (i64::from(frame.width()), i64::from(frame.height()));
    for y in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                frame.put_pixel(x as u32, y as u32, Luma([value]));
            }
        }
    }
}

/// Encode a frame as PNG bytes, as a client upload would carry it
pub fn encode_png(frame: &GrayImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(frame.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding of an in-memory frame failed");
    bytes
}
