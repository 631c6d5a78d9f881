//! Pixel sampling shared by the geometric transforms.

use crate::decode::DecodedImage;

/// Fetch a pixel as [f64; 3], substituting the fill value outside the image.
#[inline]
fn pixel_or_fill(image: &DecodedImage, px: i64, py: i64, fill: u8) -> [f64; 3] {
    if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
        let f = fill as f64;
        return [f, f, f];
    }
    let idx = (py as usize * image.width as usize + px as usize) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation with a constant fill value.
///
/// The four nearest pixels are weighted by distance; any neighbor outside
/// the image contributes the fill value, so content blends into the fill at
/// the image border instead of cutting off.
pub(crate) fn sample_bilinear(image: &DecodedImage, x: f64, y: f64, fill: u8) -> [u8; 3] {
    let (w, h) = (image.width as f64, image.height as f64);

    // No neighbor can be in bounds from out here.
    if x < -1.0 || x > w || y < -1.0 || y > h {
        return [fill, fill, fill];
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = pixel_or_fill(image, x0, y0, fill);
    let p10 = pixel_or_fill(image, x1, y0, fill);
    let p01 = pixel_or_fill(image, x0, y1, fill);
    let p11 = pixel_or_fill(image, x1, y1, fill);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
