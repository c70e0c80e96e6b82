//! Shared fixtures for image-based unit tests: synthetic heatmaps shaped
//! like touch contacts.

use crate::image::Image;

/// Render Gaussian blobs onto a `w × h` heatmap; each blob peaks at 1.
pub(crate) fn draw_blob_heatmap(
    w: usize,
    h: usize,
    centers: &[(f32, f32)],
    sigma: f32,
) -> Image<f32> {
    Image::from_fn(w, h, |x, y| {
        let mut v = 0.0f32;
        for &(cx, cy) in centers {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            v += (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
        }
        v.min(1.0)
    })
}

/// Gaussian-blur a field via `imageproc`.
pub(crate) fn blur_field(img: &Image<f32>, sigma: f32) -> Image<f32> {
    let (w, h) = (img.width() as u32, img.height() as u32);
    let buf =
        image::ImageBuffer::<image::Luma<f32>, Vec<f32>>::from_raw(w, h, img.as_slice().to_vec())
            .expect("field dimensions match");
    let blurred = imageproc::filter::gaussian_blur_f32(&buf, sigma);
    Image::from_vec(w as usize, h as usize, blurred.into_raw())
        .expect("blur preserves dimensions")
}
