use std::path::Path;

use anyhow::Context;
use image::ImageEncoder as _;

use crate::{
    foundation::error::{AvatarError, AvatarResult},
    render::canvas::Canvas,
};

/// Quality used for lossy JPEG output.
pub const JPEG_QUALITY: u8 = 80;

/// Output container chosen from a destination file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless; used for every extension not listed below.
    #[default]
    Png,
    /// `.jpg` / `.jpeg`, quality [`JPEG_QUALITY`], alpha flattened onto black.
    Jpeg,
    /// `.gif`, single palettized frame.
    Gif,
}

impl OutputFormat {
    /// Format for `path`'s extension (case-insensitive). No extension means PNG.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg") => Self::Jpeg,
            Some("gif") => Self::Gif,
            _ => Self::Png,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
        }
    }
}

/// Serialize `canvas` as `format`.
pub fn encode(canvas: &Canvas, format: OutputFormat) -> AvatarResult<Vec<u8>> {
    let mut buf = Vec::new();
    let (w, h) = (canvas.width(), canvas.height());

    match format {
        OutputFormat::Png => {
            let rgba = canvas.to_rgba_image();
            image::codecs::png::PngEncoder::new(&mut buf)
                .write_image(rgba.as_raw(), w, h, image::ExtendedColorType::Rgba8)
                .context("encode png")?;
        }
        OutputFormat::Jpeg => {
            let rgb = canvas.to_rgb_image_over_black();
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
                .write_image(rgb.as_raw(), w, h, image::ExtendedColorType::Rgb8)
                .context("encode jpeg")?;
        }
        OutputFormat::Gif => {
            // The trailer is written when the encoder drops.
            let mut encoder = image::codecs::gif::GifEncoder::new(&mut buf);
            encoder
                .encode_frame(image::Frame::new(canvas.to_rgba_image()))
                .context("encode gif")?;
        }
    }

    Ok(buf)
}

/// Encode `canvas` by `path`'s extension and write it to `path`.
///
/// The file is only created once encoding succeeded. Parent directories are not created.
pub fn write_file(canvas: &Canvas, path: &Path) -> AvatarResult<()> {
    let format = OutputFormat::from_path(path);
    let bytes = encode(canvas, format).map_err(|e| match e {
        AvatarError::Other(inner) => AvatarError::file_write(format!("{inner:#}")),
        other => other,
    })?;

    std::fs::write(path, &bytes)
        .with_context(|| format!("write {} '{}'", format.extension(), path.display()))
        .map_err(|e| AvatarError::file_write(format!("{e:#}")))?;

    tracing::debug!(path = %path.display(), ?format, bytes = bytes.len(), "wrote avatar");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/dispatch.rs"]
mod tests;
