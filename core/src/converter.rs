use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageReader, Rgba, RgbImage, RgbaImage};

use crate::config::ConvertConfig;
use crate::error::ProcessingError;

/// One source file and where its WebP goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionRequest {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Convert one image file into a padded, fixed-size WebP file.
///
/// The destination may be left missing or truncated when this returns an
/// error.
pub fn convert_image(
    request: &ConversionRequest,
    config: &ConvertConfig,
) -> Result<(), ProcessingError> {
    let img = open_image(&request.source)?;

    log::debug!(
        "Loaded {}: {}x{} ({:?})",
        request.source.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let canvas = render_canvas(&img, config);
    let encoded = encode_webp(&canvas, config.quality)?;

    log::debug!(
        "Encoded {}: {} bytes",
        request.destination.display(),
        encoded.len()
    );

    fs::write(&request.destination, &encoded).map_err(|e| ProcessingError::WriteFile {
        path: request.destination.clone(),
        source: e,
    })
}

/// Decode a file, sniffing the format from its content before trusting the
/// extension.
fn open_image(path: &Path) -> Result<DynamicImage, ProcessingError> {
    let read_err = |e| ProcessingError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    };

    ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?
        .decode()
        .map_err(|e| ProcessingError::Decode(e.to_string()))
}

/// Shrink-only, aspect-preserving fit of `width`x`height` into
/// `max_width`x`max_height`. Never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let (w, h) = (width as u64, height as u64);
    let (mw, mh) = (max_width as u64, max_height as u64);

    // Width is the limiting side when w/h >= mw/mh.
    let (nw, nh) = if w * mh >= h * mw {
        (mw, (h * mw * 2 + w) / (2 * w))
    } else {
        ((w * mh * 2 + h) / (2 * h), mh)
    };

    (
        nw.clamp(1, mw.max(1)) as u32,
        nh.clamp(1, mh.max(1)) as u32,
    )
}

/// Floor-division offsets that center `inner` inside `canvas`.
pub fn center_offset(canvas: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        canvas.0.saturating_sub(inner.0) / 2,
        canvas.1.saturating_sub(inner.1) / 2,
    )
}

/// Resize `img` to fit the configured canvas, paste it centered on the
/// background color and flatten the result to RGB.
pub fn render_canvas(img: &DynamicImage, config: &ConvertConfig) -> RgbImage {
    let mut canvas = RgbaImage::from_pixel(config.width, config.height, Rgba(config.background));

    let (src_w, src_h) = img.dimensions();
    let (dst_w, dst_h) = fit_within(src_w, src_h, config.width, config.height);

    let scaled = if (dst_w, dst_h) == (src_w, src_h) {
        img.to_rgba8()
    } else {
        log::debug!("Resizing {}x{} -> {}x{}", src_w, src_h, dst_w, dst_h);
        img.resize_exact(dst_w, dst_h, FilterType::Lanczos3).to_rgba8()
    };

    let (x, y) = center_offset(config.size(), (dst_w, dst_h));

    if img.color().has_alpha() {
        // Alpha acts as the paste mask: transparent pixels keep the background.
        imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);
    } else {
        imageops::replace(&mut canvas, &scaled, x as i64, y as i64);
    }

    DynamicImage::ImageRgba8(canvas).into_rgb8()
}

/// Encode an RGB buffer as lossy WebP.
pub fn encode_webp(img: &RgbImage, quality: f32) -> Result<Vec<u8>, ProcessingError> {
    let (width, height) = img.dimensions();
    let encoder = webp::Encoder::from_rgb(img.as_raw(), width, height);

    let encoded = encoder
        .encode_simple(false, quality)
        .map_err(|e| ProcessingError::Encode(format!("Failed to encode WebP: {:?}", e)))?;

    Ok(encoded.to_vec())
}
