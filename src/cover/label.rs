use crate::{
    assets::store::PreparedFont,
    foundation::core::Rgba8Premul,
    foundation::error::{ScratchError, ScratchResult},
    surface::blur::blur_rgba8_premul,
    surface::buffer::Surface,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Centered label stamped on the cover ("Scratch Me" by default).
pub struct LabelStyle {
    /// Label text; an empty string paints nothing.
    #[serde(default = "default_label_text")]
    pub text: String,
    /// Font size in pixels. When unset the size is responsive:
    /// 5% of the surface width, clamped to `[16, 32]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_px: Option<f32>,
    /// Text color as straight-alpha RGBA8.
    #[serde(default = "default_label_color")]
    pub color_rgba8: [u8; 4],
    /// Soft glow painted beneath the glyphs.
    #[serde(default)]
    pub glow: GlowStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Glow (shadow-blur) parameters for the label.
pub struct GlowStyle {
    /// Glow color as straight-alpha RGBA8.
    #[serde(default = "default_glow_color")]
    pub color_rgba8: [u8; 4],
    /// Gaussian blur radius in pixels; 0 disables the glow, values above
    /// [`MAX_GLOW_RADIUS_PX`] are rejected by validation.
    #[serde(default = "default_glow_radius")]
    pub radius_px: u32,
}

/// Upper bound on the glow blur radius. Anything larger than this is far
/// beyond a plausible label glow and would only inflate the glow layer.
pub const MAX_GLOW_RADIUS_PX: u32 = 256;

fn default_label_text() -> String {
    "Scratch Me".to_owned()
}

fn default_label_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_glow_color() -> [u8; 4] {
    // White at 80% opacity, the classic soft-glow shadow.
    [255, 255, 255, 204]
}

fn default_glow_radius() -> u32 {
    15
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text: default_label_text(),
            size_px: None,
            color_rgba8: default_label_color(),
            glow: GlowStyle::default(),
        }
    }
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            color_rgba8: default_glow_color(),
            radius_px: default_glow_radius(),
        }
    }
}

impl LabelStyle {
    /// Validate numeric payload invariants.
    pub fn validate(&self) -> ScratchResult<()> {
        if let Some(size) = self.size_px
            && (!size.is_finite() || size <= 0.0)
        {
            return Err(ScratchError::validation(
                "label size_px must be finite and > 0 when set",
            ));
        }
        if self.glow.radius_px > MAX_GLOW_RADIUS_PX {
            return Err(ScratchError::validation(format!(
                "glow radius_px must be <= {MAX_GLOW_RADIUS_PX}"
            )));
        }
        Ok(())
    }
}

/// Effective label size in pixels for a surface of the given width.
pub fn label_size_px(style: &LabelStyle, surface_width: u32) -> f32 {
    style
        .size_px
        .unwrap_or_else(|| (surface_width as f32 * 0.05).clamp(16.0, 32.0))
}

/// Rasterize the label and stamp it centered on the surface: first the
/// blurred glow layer, then the crisp glyphs over it.
pub fn paint_label(
    surface: &mut Surface,
    style: &LabelStyle,
    font: &PreparedFont,
) -> ScratchResult<()> {
    style.validate()?;
    if style.text.is_empty() {
        return Ok(());
    }

    let size = label_size_px(style, surface.width());
    let mask = rasterize_line(font, &style.text, size);
    if mask.width == 0 || mask.height == 0 {
        return Ok(());
    }

    // The glow needs margin around the glyphs for the blur to spread into.
    let margin = style.glow.radius_px;
    let layer_w = mask.width + 2 * margin;
    let layer_h = mask.height + 2 * margin;
    let dx = i64::from(surface.width()) / 2 - i64::from(layer_w) / 2;
    let dy = i64::from(surface.height()) / 2 - i64::from(layer_h) / 2;

    if margin > 0 {
        let glow = colorize(&mask, layer_w, layer_h, margin, style.glow.color_rgba8);
        let glow = blur_rgba8_premul(
            &glow,
            layer_w,
            layer_h,
            style.glow.radius_px,
            style.glow.radius_px as f32 * 0.5,
        )?;
        surface.composite_over(&glow, layer_w, layer_h, dx, dy)?;
    }

    let text_layer = colorize(&mask, layer_w, layer_h, margin, style.color_rgba8);
    surface.composite_over(&text_layer, layer_w, layer_h, dx, dy)?;
    Ok(())
}

struct AlphaMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

/// Rasterize a single line of text into a glyph coverage mask.
fn rasterize_line(font: &PreparedFont, text: &str, size_px: f32) -> AlphaMask {
    let font = font.font.as_ref();

    // Measure pass: line extent from per-glyph metrics.
    let mut advance = 0.0f32;
    let mut max_ascent = 0i32;
    let mut max_descent = 0i32;
    for ch in text.chars() {
        let metrics = font.metrics(ch, size_px);
        let ascent = metrics.height as i32 + metrics.ymin;
        max_ascent = max_ascent.max(ascent);
        max_descent = max_descent.max(-metrics.ymin);
        advance += metrics.advance_width;
    }

    let width = (advance.ceil() as i64).max(0) as u32;
    let height = (max_ascent + max_descent).max(0) as u32;
    if width == 0 || height == 0 {
        return AlphaMask {
            width: 0,
            height: 0,
            coverage: Vec::new(),
        };
    }

    let mut coverage = vec![0u8; width as usize * height as usize];
    let mut cursor = 0.0f32;
    for ch in text.chars() {
        let (metrics, bitmap) = font.rasterize(ch, size_px);
        let glyph_x = cursor.round() as i32 + metrics.xmin;
        let glyph_y = max_ascent - (metrics.height as i32 + metrics.ymin);

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let c = bitmap[gy * metrics.width + gx];
                if c == 0 {
                    continue;
                }
                let px = glyph_x + gx as i32;
                let py = glyph_y + gy as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    continue;
                }
                let idx = py as usize * width as usize + px as usize;
                coverage[idx] = coverage[idx].max(c);
            }
        }
        cursor += metrics.advance_width;
    }

    AlphaMask {
        width,
        height,
        coverage,
    }
}

/// Expand a coverage mask into a premultiplied RGBA8 layer of
/// `layer_w x layer_h`, colored with `color` and inset by `margin`.
fn colorize(mask: &AlphaMask, layer_w: u32, layer_h: u32, margin: u32, color: [u8; 4]) -> Vec<u8> {
    let mut layer = vec![0u8; layer_w as usize * layer_h as usize * 4];
    for my in 0..mask.height {
        for mx in 0..mask.width {
            let c = mask.coverage[my as usize * mask.width as usize + mx as usize];
            if c == 0 {
                continue;
            }
            let x = mx + margin;
            let y = my + margin;
            if x >= layer_w || y >= layer_h {
                continue;
            }
            let a = ((u16::from(color[3]) * u16::from(c)) + 127) / 255;
            let px = Rgba8Premul::from_straight_rgba(color[0], color[1], color[2], a as u8);
            let idx = (y as usize * layer_w as usize + x as usize) * 4;
            layer[idx..idx + 4].copy_from_slice(&px.to_array());
        }
    }
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/cover/label.rs"]
mod tests;
