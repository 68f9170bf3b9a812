use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    error::{AvatarError, AvatarResult},
    math::mul_div255,
};

/// Decoded layer asset in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct LayerImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> AvatarResult<LayerImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| AvatarError::asset_decode(format!("{e:#}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(LayerImage {
        width,
        height,
        rgba8_premul,
    })
}

/// Read and decode the asset at `path`. Both read and decode failures report as
/// [`AvatarError::AssetDecode`] naming the path.
pub fn load_layer_image(path: &Path) -> AvatarResult<LayerImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read layer asset '{}'", path.display()))
        .map_err(|e| AvatarError::asset_decode(format!("{e:#}")))?;
    decode_image(&bytes).map_err(|e| match e {
        AvatarError::AssetDecode(msg) => {
            AvatarError::asset_decode(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = mul_div255(u16::from(px[0]), a);
        px[1] = mul_div255(u16::from(px[1]), a);
        px[2] = mul_div255(u16::from(px[2]), a);
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
