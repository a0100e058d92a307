use crate::foundation::error::{ScratchError, ScratchResult};

/// One premultiplied RGBA8 pixel as raw bytes.
pub type PremulRgba8 = [u8; 4];

/// Source-over compositing of premultiplied pixels, with an extra global
/// opacity applied to `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    out[3] = mul_div255(u16::from(src[3]), op).saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Destination-out compositing: the incoming coverage subtracts existing
/// pixel alpha instead of painting color over it.
///
/// Full coverage (255) leaves the pixel fully transparent; zero coverage
/// leaves it untouched.
pub fn destination_out(dst: PremulRgba8, coverage: u8) -> PremulRgba8 {
    if coverage == 0 {
        return dst;
    }
    let keep = 255u16 - u16::from(coverage);
    [
        mul_div255(u16::from(dst[0]), keep),
        mul_div255(u16::from(dst[1]), keep),
        mul_div255(u16::from(dst[2]), keep),
        mul_div255(u16::from(dst[3]), keep),
    ]
}

/// Source-over an entire RGBA8 buffer in place.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ScratchResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ScratchError::surface(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composite.rs"]
mod tests;
