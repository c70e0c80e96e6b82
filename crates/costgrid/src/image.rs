//! Owned single-channel 2D grids in row-major layout.
//!
//! Elements are addressed both by linear index `i` and by `(x, y)` with
//! `i = y * stride + x`. The stride equals the width; it is kept as its own
//! accessor so that offset arithmetic in hot loops reads explicitly.

use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors that can occur when constructing an image from raw storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Buffer length does not match the requested dimensions.
    LengthMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "buffer length mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for ImageError {}

// ── Types ──────────────────────────────────────────────────────────────────

/// Grid dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    /// Width in pixels.
    pub x: usize,
    /// Height in pixels.
    pub y: usize,
}

impl GridSize {
    /// Construct a size from width and height.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Total number of pixels.
    #[inline]
    pub fn span(self) -> usize {
        self.x * self.y
    }

    /// Convert a linear index to `(x, y)` coordinates.
    #[inline]
    pub fn unravel(self, i: usize) -> (usize, usize) {
        (i % self.x, i / self.x)
    }

    /// Convert `(x, y)` coordinates to a linear index.
    #[inline]
    pub fn ravel(self, x: usize, y: usize) -> usize {
        y * self.x + x
    }
}

/// Owned dense scalar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    size: GridSize,
    stride: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Image<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            size: GridSize::new(w, h),
            stride: w,
            data: vec![T::default(); w * h],
        }
    }
}

impl<T> Image<T> {
    /// Wrap an existing row-major buffer. The length must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != w * h {
            return Err(ImageError::LengthMismatch {
                expected: w * h,
                got: data.len(),
            });
        }
        Ok(Self {
            size: GridSize::new(w, h),
            stride: w,
            data,
        })
    }

    /// Construct by evaluating `f(x, y)` at every pixel in row-major order.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            size: GridSize::new(w, h),
            stride: w,
            data,
        }
    }

    /// Grid dimensions.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.x
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Number of elements between consecutive rows (equals the width).
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// One row as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.size.x]
    }

    /// The whole buffer as a contiguous row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> Image<T> {
    /// Get the pixel value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.size.ravel(x, y)]
    }

    /// Set the pixel value at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.size.ravel(x, y);
        self.data[i] = v;
    }

    /// Overwrite every pixel with `v`.
    pub fn fill(&mut self, v: T) {
        self.data.fill(v);
    }
}

impl<T> std::ops::Index<usize> for Image<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> std::ops::IndexMut<usize> for Image<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl Image<f32> {
    /// Import an 8-bit grayscale frame, scaling values to `[0, 1]`.
    pub fn from_luma8(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        let data = img.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
        Self {
            size: GridSize::new(w as usize, h as usize),
            stride: w as usize,
            data,
        }
    }

    /// Export as an 8-bit grayscale frame with `max` mapped to 255.
    ///
    /// Values are clamped to `[0, max]`; non-finite values saturate to 255.
    pub fn to_luma8(&self, max: f32) -> GrayImage {
        let mut out = GrayImage::new(self.size.x as u32, self.size.y as u32);
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let v = self.get(x, y);
                let q = if v.is_finite() {
                    ((v / max).clamp(0.0, 1.0) * 255.0).round() as u8
                } else {
                    255
                };
                out.put_pixel(x as u32, y as u32, Luma([q]));
            }
        }
        out
    }
}
