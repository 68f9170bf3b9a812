use crate::foundation::{
    error::{AvatarError, AvatarResult},
    math::mul_div255,
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over: `src + dst * (1 - src.a)`, in premultiplied space.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Blend `src` over the top-left `width x height` region of `dst`, both row-major premultiplied
/// RGBA8 with their own row widths. Pixels outside the smaller of the two are left alone.
pub fn over_region_in_place(
    dst: &mut [u8],
    dst_width: u32,
    src: &[u8],
    src_width: u32,
    width: u32,
    height: u32,
) -> AvatarResult<()> {
    let dst_stride = dst_width as usize * 4;
    let src_stride = src_width as usize * 4;
    let row_bytes = width as usize * 4;
    let rows = height as usize;

    if width > dst_width
        || width > src_width
        || dst.len() < dst_stride * rows
        || src.len() < src_stride * rows
    {
        return Err(AvatarError::Other(anyhow::anyhow!(
            "over_region_in_place: {width}x{height} region exceeds buffers"
        )));
    }

    for y in 0..rows {
        let d_row = &mut dst[y * dst_stride..y * dst_stride + row_bytes];
        let s_row = &src[y * src_stride..y * src_stride + row_bytes];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
