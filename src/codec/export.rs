//! Raster export: nearest-neighbor upscaled PNG stills and looping GIF animations.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::png::PngEncoder;
use image::{Delay, DynamicImage, ExtendedColorType, Frame, ImageEncoder, RgbImage};

use crate::error::{EditorError, Result};
use crate::frames::FrameSequence;
use crate::grid::PixelGrid;
use crate::pixel::Pixel;

/// Magnification applied to exported images.
pub const EXPORT_SCALE: u32 = 10;

/// Upscales `grid` by `scale` with hard, blocky edges. Background cells stay opaque white.
pub fn to_static_image(grid: &PixelGrid, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let size = grid.side() as u32 * scale;
    RgbImage::from_fn(size, size, |px, py| {
        grid.get_clipped((px / scale) as i64, (py / scale) as i64)
            .unwrap_or(Pixel::BACKGROUND)
            .into()
    })
}

/// Rasterized frames plus the shared inter-frame delay of a looping animation.
#[derive(Debug, Clone)]
pub struct AnimatedExport {
    pub frames: Vec<RgbImage>,
    pub delay_ms: u32,
}

/// Rasterizes every frame for an animated export.
///
/// At least two frames are required. The delay is `1000 / fps` in whole milliseconds.
pub fn to_animated_image(frames: &FrameSequence, fps: u32, scale: u32) -> Result<AnimatedExport> {
    if frames.len() < 2 {
        return Err(EditorError::Export(
            "Minimum 2 frames required for an animation".to_owned(),
        ));
    }
    if fps == 0 {
        return Err(EditorError::Export("Animation speed must be positive".to_owned()));
    }

    Ok(AnimatedExport {
        frames: frames
            .frames()
            .iter()
            .map(|grid| to_static_image(grid, scale))
            .collect(),
        delay_ms: 1000 / fps,
    })
}

pub fn write_png<W: Write>(image: &RgbImage, writer: W) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Encodes an infinitely looping GIF.
pub fn write_gif<W: Write>(animation: &AnimatedExport, writer: W) -> Result<()> {
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(animation.delay_ms, 1);
    let frames = animation.frames.iter().map(|image| {
        let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
        Frame::from_parts(rgba, 0, 0, delay)
    });
    encoder.encode_frames(frames)?;
    Ok(())
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    write_png(image, &mut writer)?;
    writer.flush()?;
    log::info!("Saved as: {}", path.display());
    Ok(())
}

pub fn save_gif(animation: &AnimatedExport, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    write_gif(animation, &mut writer)?;
    writer.flush()?;
    log::info!(
        "Animation saved as: {} ({} frames, {}ms)",
        path.display(),
        animation.frames.len(),
        animation.delay_ms
    );
    Ok(())
}
