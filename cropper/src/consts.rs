//! Shared numeric constants for the crop pipeline.

/// Minimum zoom factor; 1.0 shows the largest croppable square.
pub const ZOOM_MIN: f64 = 1.0;

/// Maximum zoom factor exposed by the zoom slider.
pub const ZOOM_MAX: f64 = 3.0;

/// Side length in pixels of the encoded avatar.
pub const OUTPUT_SIZE: u32 = 512;

/// JPEG encoder quality passed to `toBlob`.
pub const JPEG_QUALITY: f64 = 0.9;
