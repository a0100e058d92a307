use std::sync::Arc;

#[derive(Clone, Debug)]
/// Prepared cover texture in premultiplied RGBA8 form.
pub struct PreparedTexture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone)]
/// Parsed font used to rasterize the cover label.
pub struct PreparedFont {
    /// Parsed `fontdue` face.
    pub font: Arc<fontdue::Font>,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("font_ptr", &Arc::as_ptr(&self.font))
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}
