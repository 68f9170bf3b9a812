use crate::{
    assets::decode::{LayerImage, unpremultiply_rgba8_in_place},
    foundation::core::CANVAS_SIZE,
    foundation::error::{AvatarError, AvatarResult},
    render::composite::{PremulRgba8, over_region_in_place},
};

/// Mutable premultiplied RGBA8 pixel buffer owned by one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Fully transparent `width x height` canvas.
    pub fn new(width: u32, height: u32) -> AvatarResult<Self> {
        if width == 0 || height == 0 {
            return Err(AvatarError::Other(anyhow::anyhow!(
                "canvas dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| {
                AvatarError::Other(anyhow::anyhow!(
                    "canvas dimensions {width}x{height} overflow the address space"
                ))
            })?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Fully transparent avatar-sized canvas.
    pub fn avatar() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            data: vec![0u8; CANVAS_SIZE as usize * CANVAS_SIZE as usize * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes, row-major.
    pub fn as_premul_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Source-over `layer` anchored at the origin, clipped to the overlap of both.
    pub fn draw_over(&mut self, layer: &LayerImage) -> AvatarResult<()> {
        let width = self.width.min(layer.width);
        let height = self.height.min(layer.height);
        over_region_in_place(
            &mut self.data,
            self.width,
            &layer.rgba8_premul,
            layer.width,
            width,
            height,
        )
    }

    /// Straight-alpha copy for display and lossless encoders.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Opaque copy flattened onto black (the premultiplied colour channels).
    pub fn to_rgb_image_over_black(&self) -> image::RgbImage {
        let data: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image::RgbImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }
}

impl From<Canvas> for image::RgbaImage {
    fn from(canvas: Canvas) -> Self {
        canvas.to_rgba_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
