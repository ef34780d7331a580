/// Default canvas edge length in pixels.
pub const DEFAULT_SIZE: u32 = 800;

/// Lossy WebP quality used for every output file.
pub const WEBP_QUALITY: f32 = 80.0;

/// Opaque white, RGBA.
pub const CANVAS_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// WebP quality 0-100
    pub quality: f32,
    /// Fill color for the padding around the image
    pub background: [u8; 4],
}

impl ConvertConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            quality: WEBP_QUALITY,
            background: CANVAS_BACKGROUND,
        }
    }
}
